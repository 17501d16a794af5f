//! HTTP Module
//!
//! リモートファイルのダウンロード

pub mod fetcher;
