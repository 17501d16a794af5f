//! # blobingest
//!
//! ローカルファイルやリモートURLを Azure Blob Storage に取り込むツール
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: 入力・結果のエンティティ、URL正規化、Repository trait（Azure・HTTPに依存しない）
//! - **Application層**: 1件アップロードとバッチ処理のユースケース
//! - **Adapter層**: Azure Blob Storage、HTTP、ファイルシステムとの統合
//! - **Driver層**: CLI、ロガー、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
// カバレッジ計測時に外部サービス依存コードを除外するために使用
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
