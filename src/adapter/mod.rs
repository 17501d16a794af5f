//! Adapter Layer
//!
//! 外部システム（Azure Blob Storage, HTTP, ファイルシステム）との統合

pub mod auth;
pub mod http;
pub mod repositories;
