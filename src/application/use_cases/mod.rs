//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **UploadSourceUseCase**: 1件のソースの取得とアップロード
//! - **IngestBatchUseCase**: 入力リスト全体の順次処理

pub mod ingest_batch;
pub mod upload_source;
