//! Azure Authentication
//!
//! 環境から取得した資格情報でBlob Storageクライアントを作成する

use anyhow::{bail, Context, Result};
use azure_core::auth::TokenCredential;
use azure_storage::{CloudLocation, StorageCredentials};
use azure_storage_blobs::prelude::{BlobServiceClient, ClientBuilder};
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

/// ストレージエンドポイント用のBearer資格情報を提供する
#[cfg_attr(test, automock)]
pub trait CredentialProvider: Send + Sync {
    fn token_credential(&self) -> Result<Arc<dyn TokenCredential>>;
}

/// 環境変数・マネージドID・Azure CLIログインの順に資格情報を探す
#[derive(Debug, Clone, Copy, Default)]
pub struct AmbientCredentialProvider;

impl CredentialProvider for AmbientCredentialProvider {
    fn token_credential(&self) -> Result<Arc<dyn TokenCredential>> {
        azure_identity::create_credential().context("Failed to discover ambient Azure credentials")
    }
}

/// ストレージアカウントのBlobエンドポイントURL
pub fn account_url(storage_account_name: &str) -> String {
    format!("https://{}.blob.core.windows.net", storage_account_name)
}

/// `https://{account}.blob.core.windows.net` に接続するクライアントを作成する
///
/// # Errors
///
/// アカウント名が空の場合、または資格情報を取得できない場合
pub fn create_blob_service_client(
    storage_account_name: &str,
    provider: &dyn CredentialProvider,
) -> Result<BlobServiceClient> {
    if storage_account_name.is_empty() {
        bail!("Storage account name is empty");
    }

    let credential = provider
        .token_credential()
        .context("Failed to authenticate with Azure")?;

    let location = CloudLocation::Public {
        account: storage_account_name.to_string(),
    };
    let client = ClientBuilder::with_location(
        location,
        StorageCredentials::token_credential(credential),
    )
    .blob_service_client();

    Ok(client)
}
