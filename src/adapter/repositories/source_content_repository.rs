//! Source Content Repository Implementation
//!
//! ContentRepositoryのファイルシステム + HTTP実装

use async_trait::async_trait;
use log::debug;
use std::path::Path;

use crate::adapter::http::fetcher::HttpContentFetcher;
use crate::domain::repositories::content_repository::{
    ContentRepository, SourceContent, SourceError,
};

/// ローカルファイルとリモートURLの両方を扱うリポジトリ
#[derive(Debug, Clone, Default)]
pub struct SourceContentRepository {
    fetcher: HttpContentFetcher,
}

impl SourceContentRepository {
    /// 新しいリポジトリを作成
    pub fn new(fetcher: HttpContentFetcher) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl ContentRepository for SourceContentRepository {
    async fn read_local(&self, path: &Path) -> Result<SourceContent, SourceError> {
        let bytes = tokio::fs::read(path).await.map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());
        Ok(SourceContent::new(bytes, None))
    }

    async fn fetch_remote(&self, url: &str) -> Result<SourceContent, SourceError> {
        debug!("GET {}", url);
        self.fetcher.fetch(url).await
    }
}
