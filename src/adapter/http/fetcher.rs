//! HTTP Content Fetcher
//!
//! reqwestによるリモートファイルのダウンロード

use bytes::BytesMut;
use futures::StreamExt;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::domain::repositories::content_repository::{SourceContent, SourceError};

/// リモートファイルをストリーミングGETで取得する
///
/// タイムアウトは設定しない
#[derive(Debug, Clone, Default)]
pub struct HttpContentFetcher {
    client: Client,
}

impl HttpContentFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// URLをGETし、本文と `Content-Type` を返す
    ///
    /// # Errors
    ///
    /// - 接続・本文読み込みに失敗した場合は `SourceError::Request`
    /// - 2xx以外のステータスは `SourceError::Status`
    pub async fn fetch(&self, url: &str) -> Result<SourceContent, SourceError> {
        let request_error = |e: reqwest::Error| SourceError::Request {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let mut body = BytesMut::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            body.extend_from_slice(&chunk.map_err(request_error)?);
        }

        Ok(SourceContent::new(body.freeze(), content_type))
    }
}
