//! Azure Blob Repository Implementation
//!
//! BlobRepositoryのAzure Blob Storage実装

use async_trait::async_trait;
use azure_storage_blobs::prelude::BlobServiceClient;
use log::debug;

use crate::domain::repositories::blob_repository::{BlobRepository, BlobUpload, StorageError};

/// Azure Blob Storageリポジトリ
///
/// Block Blobとして書き込み、既存のBlobは上書きする
#[derive(Clone)]
pub struct AzureBlobRepository {
    service: BlobServiceClient,
}

impl AzureBlobRepository {
    /// 新しいリポジトリを作成
    pub fn new(service: BlobServiceClient) -> Self {
        Self { service }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl BlobRepository for AzureBlobRepository {
    async fn put_blob(&self, upload: &BlobUpload) -> Result<(), StorageError> {
        let blob = self
            .service
            .container_client(upload.container.clone())
            .blob_client(upload.blob_name.clone());

        let mut request = blob.put_block_blob(upload.content.clone());
        if let Some(content_type) = &upload.content_type {
            request = request.content_type(content_type.clone());
        }

        request.await.map_err(|e| StorageError {
            container: upload.container.clone(),
            blob_name: upload.blob_name.clone(),
            message: e.to_string(),
        })?;

        debug!(
            "Wrote {} bytes to {}/{}",
            upload.content.len(),
            upload.container,
            upload.blob_name
        );
        Ok(())
    }
}
