//! # Data Transfer Objects

pub mod ingest_config;
