//! # UploadOutcome Value Object
//!
//! 1件ごとのアップロード結果とバッチ全体のレポート

use thiserror::Error;

use super::input_item::Source;
use crate::domain::repositories::blob_repository::StorageError;
use crate::domain::repositories::content_repository::SourceError;

/// スキップ理由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// `Content-Type` が `text/html`
    HtmlContent,
    /// 本文が空
    EmptyBody,
}

/// 1件のアップロード失敗
#[derive(Debug, Error)]
pub enum UploadError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Blob名を決定できない
    #[error("cannot derive a blob name from '{0}'")]
    InvalidBlobName(String),
}

impl UploadError {
    /// HTTP層のエラーかどうか
    pub fn is_http(&self) -> bool {
        matches!(self, UploadError::Source(e) if e.is_http())
    }
}

/// 1件のアップロード結果
#[derive(Debug)]
pub enum UploadOutcome {
    Uploaded {
        source: Source,
        blob_name: String,
        bytes: usize,
    },
    Skipped {
        source: Source,
        reason: SkipReason,
    },
    Failed {
        source: Source,
        blob_name: Option<String>,
        error: UploadError,
    },
}

impl UploadOutcome {
    pub fn source(&self) -> &Source {
        match self {
            UploadOutcome::Uploaded { source, .. }
            | UploadOutcome::Skipped { source, .. }
            | UploadOutcome::Failed { source, .. } => source,
        }
    }

    pub fn is_uploaded(&self) -> bool {
        matches!(self, UploadOutcome::Uploaded { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, UploadOutcome::Skipped { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, UploadOutcome::Failed { .. })
    }
}

/// バッチ全体のレポート
///
/// 入力順に結果を保持する。終了コードには影響しない。
#[derive(Debug, Default)]
pub struct BatchReport {
    outcomes: Vec<UploadOutcome>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: UploadOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[UploadOutcome] {
        &self.outcomes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn uploaded_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_uploaded()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_skipped()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failed()).count()
    }
}

impl From<Vec<UploadOutcome>> for BatchReport {
    fn from(outcomes: Vec<UploadOutcome>) -> Self {
        Self { outcomes }
    }
}
