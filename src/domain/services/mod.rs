//! # Domain Services

pub mod url_normalizer;
