//! 日志初始化
//!
//! TUI 占用了整个终端，日志只能写文件：
//! `<data_local_dir>/acme-portal/acme-portal-tui.log`
//!
//! 级别由 `RUST_LOG` 控制，默认 `info`。

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target, WriteStyle};

const LOG_FILE: &str = "acme-portal-tui.log";

/// 日志文件路径
pub fn log_file_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("acme-portal")
        .join(LOG_FILE)
}

/// 初始化全局 logger，返回日志文件路径
pub fn init_logger() -> Result<PathBuf> {
    let path = log_file_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .write_style(WriteStyle::Never)
        .format_timestamp_millis()
        .try_init()
        .context("Logger already initialized")?;

    Ok(path)
}
