//! # Blob Repository Trait
//!
//! Blobへの書き込みを抽象化

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

/// 書き込むBlob
#[derive(Debug, Clone)]
pub struct BlobUpload {
    /// コンテナ名
    pub container: String,
    /// Blob名
    pub blob_name: String,
    /// 本文
    pub content: Bytes,
    /// Blobに設定するContent-Type
    pub content_type: Option<String>,
}

/// Blob書き込みエラー
#[derive(Debug, Error)]
#[error("failed to write blob {container}/{blob_name}: {message}")]
pub struct StorageError {
    pub container: String,
    pub blob_name: String,
    pub message: String,
}

/// Blobリポジトリ
///
/// 同名のBlobが存在する場合は上書きする（バージョニング・条件付き書き込みなし）
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BlobRepository: Send + Sync {
    /// Blobを書き込む
    async fn put_blob(&self, upload: &BlobUpload) -> Result<(), StorageError>;
}
