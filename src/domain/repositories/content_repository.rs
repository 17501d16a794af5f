//! # Content Repository Trait
//!
//! アップロード元からのコンテンツ取得を抽象化

use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

/// 取得したコンテンツ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceContent {
    /// 本文
    pub bytes: Bytes,
    /// `Content-Type` ヘッダ（ローカルファイルは `None`）
    pub content_type: Option<String>,
}

impl SourceContent {
    pub fn new(bytes: impl Into<Bytes>, content_type: Option<String>) -> Self {
        Self {
            bytes: bytes.into(),
            content_type,
        }
    }

    /// HTMLページかどうか（`text/html` を含む、大文字小文字を区別しない）
    pub fn is_html(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.to_ascii_lowercase().contains("text/html"))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

/// コンテンツ取得エラー
#[derive(Debug, Error)]
pub enum SourceError {
    /// 接続失敗・本文読み込み失敗など
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    /// 2xx以外のステータス
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// ローカルファイルの読み込み失敗
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    /// HTTP層のエラーかどうか
    pub fn is_http(&self) -> bool {
        matches!(self, SourceError::Request { .. } | SourceError::Status { .. })
    }
}

/// コンテンツリポジトリ
///
/// ローカルファイルの読み込みとリモートURLのダウンロードを担当する
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// ローカルファイルをバイナリとして読み込む
    ///
    /// ファイルハンドルはこの呼び出しの中で閉じられる
    async fn read_local(&self, path: &Path) -> Result<SourceContent, SourceError>;

    /// URLをGETする
    ///
    /// # Errors
    ///
    /// 接続失敗または2xx以外のステータスの場合
    async fn fetch_remote(&self, url: &str) -> Result<SourceContent, SourceError>;
}
