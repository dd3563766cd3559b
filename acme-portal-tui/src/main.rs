//! ACME Portal TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)，只改状态并返回 `BackendCommand`
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 网络请求、导出与配置读写 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logger()                   // 日志写入文件，失败时仅提示
//!     JsonConfigService::load()       // 读取配置文件，再叠加环境变量
//!     set_theme_index / set_language  // 应用配置中的主题和语言
//!     tokio Runtime                   // 后端任务在运行时上执行
//!     PortalBackend::new()            // 连接后端 API
//!     init_terminal()                 // 进入备用屏幕和 raw 模式
//!     app::run()                      // 运行 app.rs 主循环
//!     restore_terminal()              // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::mpsc;

use backend::{ConfigService, JsonConfigService, PortalBackend};
use util::{init_logger, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 日志（终端被 TUI 占用，只能写文件）
    match init_logger() {
        Ok(path) => log::info!(
            "ACME Portal TUI v{} (log: {})",
            env!("CARGO_PKG_VERSION"),
            path.display()
        ),
        Err(e) => eprintln!("Failed to initialize logger: {e:#}"),
    }

    // 2. 配置
    let config_service = JsonConfigService::new();
    log::info!("Config file: {}", config_service.path().display());
    let config = config_service
        .load()
        .unwrap_or_else(|e| {
            log::warn!("Failed to load config, using defaults: {e:#}");
            backend::AppConfig::default()
        })
        .with_env_overrides();

    view::theme::set_theme_index(config.theme().index());
    i18n::set_language(config.language());

    // 3. 后端
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let backend = PortalBackend::new(
        runtime.handle().clone(),
        tx,
        &config,
        Arc::new(config_service),
    );

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例并运行主循环
    let mut app = model::App::new(config);
    let result = app::run(&mut terminal, &mut app, &backend, &mut rx);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        log::error!("Application error: {e:#}");
    }
    result
}
