//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **InputItem**: アップロード対象とBlob名
//! - **UploadOutcome**: 1件ごとの結果とバッチレポート

pub mod input_item;
pub mod upload_outcome;
