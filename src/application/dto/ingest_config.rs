//! # Ingest Configuration DTO
//!
//! 取り込み設定のData Transfer Object

use crate::domain::entities::input_item::{parse_input_paths, InputItem};

/// 取り込み設定
///
/// Azure Blob Storageへのアップロードに必要な設定情報
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// ストレージアカウント名
    pub storage_account_name: String,
    /// コンテナ名
    pub container_name: String,
    /// アップロード対象（入力順）
    pub items: Vec<InputItem>,
}

impl IngestConfig {
    /// 新しい取り込み設定を作成します。
    ///
    /// `input_paths` はカンマ区切りで分割されます。
    ///
    /// # 例
    ///
    /// ```
    /// use blobingest::application::dto::ingest_config::IngestConfig;
    ///
    /// let config = IngestConfig::new(
    ///     "mystorageaccount".to_string(),
    ///     "docs".to_string(),
    ///     "./notes.txt,https://github.com/org/repo/blob/main/readme.md",
    /// );
    ///
    /// assert_eq!(config.items.len(), 2);
    /// assert_eq!(config.container_name, "docs");
    /// ```
    pub fn new(storage_account_name: String, container_name: String, input_paths: &str) -> Self {
        Self {
            storage_account_name,
            container_name,
            items: parse_input_paths(input_paths),
        }
    }
}
