//! Repository Implementations
//!
//! Domain層のRepository traitの具体的な実装

pub mod azure_blob_repository;
pub mod source_content_repository;
