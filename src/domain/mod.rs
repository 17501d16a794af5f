//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - Azure SDKやHTTPクライアントに依存しない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（InputItem, UploadOutcomeなど）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（URL正規化）

pub mod entities;
pub mod repositories;
pub mod services;
