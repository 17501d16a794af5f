//! blobingest - Azure Blob Storage ingestion
//!
//! ローカルファイルやリモートURLをAzure Blob Storageにアップロード

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use clap::Parser;
use log::error;

use blobingest::application::dto::ingest_config::IngestConfig;
use blobingest::driver::logger::init_logger;
use blobingest::driver::{Args, IngestWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logger();

    let args = Args::parse();
    let workflow = IngestWorkflow::new(IngestConfig::from(args));

    // 1件ごとの失敗は終了コードに影響しない
    if let Err(e) = workflow.execute().await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
