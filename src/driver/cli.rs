//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

use crate::application::dto::ingest_config::IngestConfig;

/// ローカルファイルやリモートURLをAzure Blob Storageに取り込むCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "blobingest")]
#[command(about = "Ingest data into Azure Storage Account", long_about = None)]
pub struct Args {
    /// Azure Storage Account name
    #[arg(long)]
    pub storage_account_name: String,

    /// Azure Storage Account container name
    #[arg(long)]
    pub container_name: String,

    /// Comma-separated list of local files or remote URLs to upload
    #[arg(long)]
    pub input_paths: String,
}

impl From<Args> for IngestConfig {
    fn from(args: Args) -> Self {
        IngestConfig::new(
            args.storage_account_name,
            args.container_name,
            &args.input_paths,
        )
    }
}
