//! Logger Setup
//!
//! タイムスタンプ付きの1行ログを標準出力に出す

use chrono::{Local, NaiveDateTime};
use env_logger::{Builder, Env, Target};
use std::fmt::Display;
use std::io::Write;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `[YYYY-MM-DD HH:MM:SS] message` 形式の1行を作る
pub fn format_line(timestamp: NaiveDateTime, message: impl Display) -> String {
    format!("[{}] {}", timestamp.format(TIMESTAMP_FORMAT), message)
}

/// ロガーを初期化する
///
/// デフォルトは `info`。`RUST_LOG` で上書きできる。
pub fn init_logger() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .format(|buf, record| {
            writeln!(
                buf,
                "{}",
                format_line(Local::now().naive_local(), record.args())
            )
        })
        .init();
}
