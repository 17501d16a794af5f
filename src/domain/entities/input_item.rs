//! # InputItem Entity
//!
//! アップロード対象（ローカルファイルまたはリモートURL）のエンティティ

use std::fmt;
use std::path::PathBuf;

/// アップロード元
///
/// `http://` または `https://` で始まる文字列はリモートURL、それ以外はローカルパス
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// ローカルファイルのパス
    Local(PathBuf),
    /// リモートURL（正規化前）
    Remote(String),
}

impl Source {
    /// 文字列からアップロード元を判定する
    ///
    /// ローカルパスは `~` を展開する。
    ///
    /// # 例
    ///
    /// ```
    /// use blobingest::domain::entities::input_item::Source;
    ///
    /// assert!(Source::parse("https://example.com/a.txt").is_remote());
    /// assert!(!Source::parse("./notes.txt").is_remote());
    /// ```
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Source::Remote(raw.to_string())
        } else {
            Source::Local(PathBuf::from(shellexpand::tilde(raw).as_ref()))
        }
    }

    /// リモートURLかどうか
    pub fn is_remote(&self) -> bool {
        matches!(self, Source::Remote(_))
    }

    /// ソースの最後のパス要素を返す
    ///
    /// リモートURLの場合はクエリ文字列とフラグメントを無視する。
    /// 空になる場合（`dir/`、`https://host/` など）や、ローカルのファイル名が
    /// UTF-8でない場合は `None`。
    pub fn file_name(&self) -> Option<String> {
        let name = match self {
            Source::Local(path) => path.file_name()?.to_str()?.to_string(),
            Source::Remote(url) => {
                let without_fragment = url.split('#').next().unwrap_or_default();
                let path = without_fragment.split('?').next().unwrap_or_default();
                let after_scheme = path.split_once("://").map_or(path, |(_, rest)| rest);
                // ホストのみのURL（パスなし）はファイル名を持たない
                let (_, url_path) = after_scheme.split_once('/')?;
                url_path.rsplit('/').next().unwrap_or_default().to_string()
            }
        };

        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Local(path) => write!(f, "{}", path.display()),
            Source::Remote(url) => f.write_str(url),
        }
    }
}

/// アップロード対象の1件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputItem {
    /// アップロード元
    pub source: Source,
    /// 明示的なBlob名（省略時はソースのファイル名）
    pub blob_name: Option<String>,
}

impl InputItem {
    /// Blob名を指定せずに作成
    pub fn new(raw: &str) -> Self {
        Self {
            source: Source::parse(raw),
            blob_name: None,
        }
    }

    /// Blob名を指定して作成
    pub fn with_blob_name(raw: &str, blob_name: impl Into<String>) -> Self {
        Self {
            source: Source::parse(raw),
            blob_name: Some(blob_name.into()),
        }
    }

    /// 実際に使用するBlob名を解決する
    ///
    /// 明示的な名前が空でなければそれを使い、そうでなければソースから導出する。
    /// どちらも空の場合は `None`。
    pub fn resolve_blob_name(&self) -> Option<String> {
        match self.blob_name.as_deref() {
            Some(name) if !name.is_empty() => Some(name.to_string()),
            _ => self.source.file_name(),
        }
    }
}

/// `--input-paths` の値をカンマで分割する
///
/// エスケープはサポートしない（カンマを含むソースは表現できない）。
/// 各要素はトリムせずそのまま扱い、空要素も1件として残す。
pub fn parse_input_paths(raw: &str) -> Vec<InputItem> {
    raw.split(',').map(InputItem::new).collect()
}
