//! # Ingest Batch Use Case
//!
//! 入力リストを順番にアップロードするユースケース

use log::info;

use super::upload_source::UploadSourceUseCase;
use crate::domain::entities::input_item::InputItem;
use crate::domain::entities::upload_outcome::BatchReport;
use crate::domain::repositories::blob_repository::BlobRepository;
use crate::domain::repositories::content_repository::ContentRepository;

/// バッチ取り込みユースケース
///
/// 1件の失敗でバッチ全体を中断しない
pub struct IngestBatchUseCase<C: ContentRepository, B: BlobRepository> {
    upload_use_case: UploadSourceUseCase<C, B>,
}

impl<C: ContentRepository, B: BlobRepository> IngestBatchUseCase<C, B> {
    pub fn new(upload_use_case: UploadSourceUseCase<C, B>) -> Self {
        Self { upload_use_case }
    }

    /// 入力順に1件ずつアップロードし、結果をレポートにまとめる
    ///
    /// # Arguments
    ///
    /// * `container` - コンテナ名
    /// * `items` - アップロード対象
    pub async fn execute(&self, container: &str, items: &[InputItem]) -> BatchReport {
        let mut report = BatchReport::new();

        for (i, item) in items.iter().enumerate() {
            info!("Processing {}/{}: {}", i + 1, items.len(), item.source);
            let outcome = self.upload_use_case.execute(container, item).await;
            report.push(outcome);
        }

        info!(
            "Finished: {} uploaded, {} skipped, {} failed (of {})",
            report.uploaded_count(),
            report.skipped_count(),
            report.failed_count(),
            report.len()
        );

        report
    }
}
