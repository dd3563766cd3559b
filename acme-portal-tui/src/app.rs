//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，创建终端并初始化为以下状态：
//!
//! App {
//!
//!     should_quit: bool = false,                      // 决定应用是否应该退出
//!     focus: FocusPanel::Navigation,                  // 当前焦点在哪个面板
//!     navigation: NavigationState{
//!         items: [Challenge , Issue , Settings],
//!         selected = 0                                    // 当前选中第几项，默认为 0
//!     },
//!     current_page = Page::Challenge,                 // 当前应该显示哪个页面，默认为 Challenge
//!     status_message = None,                          // 状态栏消息
//!     config,                                         // 启动时加载的配置
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     while let Ok(msg) = rx.try_recv() {             // 取出所有已完成的后端任务
//!         update::update(&mut app , Backend(msg))         // 写回结果（过期票据被丢弃）
//!     }
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         if let Some(cmd) = update::update(&mut app , msg) {
//!             backend.dispatch(cmd)                       // 副作用交给后端异步执行
//!         }
//!     }
//! }

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::PortalBackend;
use crate::event;
use crate::message::{AppMessage, BackendMessage};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    backend: &PortalBackend,
    rx: &mut UnboundedReceiver<BackendMessage>,
) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 处理后端完成的任务
        while let Ok(msg) = rx.try_recv() {
            if let Some(command) = update::update(app, AppMessage::Backend(msg)) {
                backend.dispatch(command);
            }
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 6. 更新状态，副作用交给后端
            if let Some(command) = update::update(app, msg) {
                backend.dispatch(command);
            }
        }
    }

    Ok(())
}
