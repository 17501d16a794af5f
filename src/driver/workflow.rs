//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use log::info;

use std::sync::Arc;

use crate::adapter::auth::azure_auth::{
    account_url, create_blob_service_client, AmbientCredentialProvider, CredentialProvider,
};
use crate::adapter::http::fetcher::HttpContentFetcher;
use crate::adapter::repositories::azure_blob_repository::AzureBlobRepository;
use crate::adapter::repositories::source_content_repository::SourceContentRepository;
use crate::application::dto::ingest_config::IngestConfig;
use crate::application::use_cases::ingest_batch::IngestBatchUseCase;
use crate::application::use_cases::upload_source::UploadSourceUseCase;
use crate::domain::entities::upload_outcome::BatchReport;

/// Ingest Workflow
pub struct IngestWorkflow {
    config: IngestConfig,
    credential_provider: Arc<dyn CredentialProvider>,
}

impl IngestWorkflow {
    /// 環境の資格情報を使うワークフローを作成
    pub fn new(config: IngestConfig) -> Self {
        Self::with_credential_provider(config, Arc::new(AmbientCredentialProvider))
    }

    /// 資格情報プロバイダを指定してワークフローを作成
    pub fn with_credential_provider(
        config: IngestConfig,
        credential_provider: Arc<dyn CredentialProvider>,
    ) -> Self {
        Self {
            config,
            credential_provider,
        }
    }

    /// Execute the ingest workflow
    ///
    /// # Errors
    ///
    /// クライアントの作成に失敗した場合のみ。1件ごとの失敗はレポートに含まれる。
    pub async fn execute(&self) -> Result<BatchReport> {
        info!(
            "Ingesting {} source(s) into {}/{}",
            self.config.items.len(),
            account_url(&self.config.storage_account_name),
            self.config.container_name
        );

        let service = create_blob_service_client(
            &self.config.storage_account_name,
            self.credential_provider.as_ref(),
        )?;

        let content_repo = Arc::new(SourceContentRepository::new(HttpContentFetcher::new()));
        let blob_repo = Arc::new(AzureBlobRepository::new(service));
        let use_case = IngestBatchUseCase::new(UploadSourceUseCase::new(content_repo, blob_repo));

        Ok(use_case
            .execute(&self.config.container_name, &self.config.items)
            .await)
    }
}
