//! # Upload Source Use Case
//!
//! 1件のソースを取得してBlobに書き込むユースケース

use std::sync::Arc;

use log::{log, Level};

use crate::domain::entities::input_item::{InputItem, Source};
use crate::domain::entities::upload_outcome::{SkipReason, UploadError, UploadOutcome};
use crate::domain::repositories::blob_repository::{BlobRepository, BlobUpload};
use crate::domain::repositories::content_repository::{ContentRepository, SourceContent};
use crate::domain::services::url_normalizer::to_raw_content_url;

/// 1件アップロードのユースケース
///
/// 失敗は `UploadOutcome::Failed` として返し、`Err` は返さない
pub struct UploadSourceUseCase<C: ContentRepository, B: BlobRepository> {
    content_repository: Arc<C>,
    blob_repository: Arc<B>,
}

impl<C: ContentRepository, B: BlobRepository> UploadSourceUseCase<C, B> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `content_repository` - コンテンツリポジトリ
    /// * `blob_repository` - Blobリポジトリ
    pub fn new(content_repository: Arc<C>, blob_repository: Arc<B>) -> Self {
        Self {
            content_repository,
            blob_repository,
        }
    }

    /// ソースを取得して `{container}/{blob名}` に上書きアップロードする
    ///
    /// 結果は全てログに出力される
    pub async fn execute(&self, container: &str, item: &InputItem) -> UploadOutcome {
        let outcome = self.upload(container, item).await;
        log_outcome(&outcome);
        outcome
    }

    async fn upload(&self, container: &str, item: &InputItem) -> UploadOutcome {
        let source = item.source.clone();

        let Some(blob_name) = item.resolve_blob_name() else {
            let error = UploadError::InvalidBlobName(source.to_string());
            return UploadOutcome::Failed {
                source,
                blob_name: None,
                error,
            };
        };

        let content = match self.load(&source).await {
            Ok(content) => content,
            Err(error) => {
                return UploadOutcome::Failed {
                    source,
                    blob_name: Some(blob_name),
                    error,
                }
            }
        };

        if source.is_remote() {
            let reason = if content.is_html() {
                Some(SkipReason::HtmlContent)
            } else if content.is_empty() {
                Some(SkipReason::EmptyBody)
            } else {
                None
            };
            if let Some(reason) = reason {
                return UploadOutcome::Skipped { source, reason };
            }
        }

        let bytes = content.len();
        let upload = BlobUpload {
            container: container.to_string(),
            blob_name: blob_name.clone(),
            content: content.bytes,
            content_type: content.content_type,
        };

        match self.blob_repository.put_blob(&upload).await {
            Ok(()) => UploadOutcome::Uploaded {
                source,
                blob_name,
                bytes,
            },
            Err(e) => UploadOutcome::Failed {
                source,
                blob_name: Some(blob_name),
                error: e.into(),
            },
        }
    }

    async fn load(&self, source: &Source) -> Result<SourceContent, UploadError> {
        let content = match source {
            Source::Local(path) => self.content_repository.read_local(path).await?,
            Source::Remote(url) => {
                let raw_url = to_raw_content_url(url);
                self.content_repository.fetch_remote(&raw_url).await?
            }
        };
        Ok(content)
    }
}

fn log_outcome(outcome: &UploadOutcome) {
    let (level, message) = outcome_message(outcome);
    log!(level, "{}", message);
}

/// ログに出すレベルとメッセージ
///
/// リモートソースは実際にリクエストしたraw content URLで表示する
pub fn outcome_message(outcome: &UploadOutcome) -> (Level, String) {
    let requested = requested_location(outcome.source());
    match outcome {
        UploadOutcome::Uploaded {
            source,
            blob_name,
            bytes,
        } => {
            let kind = if source.is_remote() { "remote" } else { "local" };
            (
                Level::Info,
                format!(
                    "Uploaded {} file {} to blob {} ({} bytes)",
                    kind, requested, blob_name, bytes
                ),
            )
        }
        UploadOutcome::Skipped { reason, .. } => {
            let why = match reason {
                SkipReason::HtmlContent => "URL points to an HTML page",
                SkipReason::EmptyBody => "response body is empty",
            };
            (Level::Warn, format!("Skipped {}: {}", requested, why))
        }
        UploadOutcome::Failed { error, .. } if error.is_http() => (
            Level::Error,
            format!("HTTP request failed for {}: {}", requested, error),
        ),
        UploadOutcome::Failed {
            blob_name, error, ..
        } => (
            Level::Error,
            format!(
                "Failed to upload {} to blob {}: {}",
                requested,
                blob_name.as_deref().unwrap_or("<none>"),
                error
            ),
        ),
    }
}

fn requested_location(source: &Source) -> String {
    match source {
        Source::Remote(url) => to_raw_content_url(url),
        Source::Local(_) => source.to_string(),
    }
}
