//! Authentication Module
//!
//! Azure認証関連の機能

pub mod azure_auth;

pub use azure_auth::{create_blob_service_client, AmbientCredentialProvider, CredentialProvider};
