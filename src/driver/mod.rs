//! # Driver Layer (Presentation)
//!
//! CLIやその他の外部インターフェースを提供
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数のパース
//! - **logger**: タイムスタンプ付きログの初期化
//! - **workflow**: 依存性注入とワークフロー全体のオーケストレーション

pub mod cli;
pub mod logger;
pub mod workflow;

pub use cli::Args;
pub use workflow::IngestWorkflow;
