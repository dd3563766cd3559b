//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用
//!
//!         pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
//!
//!             if event::poll(timeout)? {                  // 此处阻塞以等待事件，最长等待 timeout
//!                 Ok(Some(event::read()?))
//!             } else {
//!                 Ok(None)
//!             }
//!         }
//!
//!         · handle_event    把 Event 翻译为 AppMessage，只读 App
//!
//!
//!     按键分发顺序：
//!         1. 只处理 KeyEventKind::Press
//!         2. 有弹窗时只响应 Esc / Enter / Ctrl+C（关闭弹窗）
//!         3. 全局键：Ctrl+C / Alt+q 退出，Alt+h 帮助，Esc 返回，Tab 切换焦点
//!         4. 焦点在导航栏：↑↓ / j k / Home / End / Enter / ?
//!         5. 焦点在内容区：
//!             · 表单页：字符输入、Backspace、Ctrl+U 清空、Enter 提交、
//!                       ↑↓ PgUp PgDn 滚动结果，
//!                       签发页额外有 Alt+s 导出、Alt+v 显示私钥
//!             · 设置页：↑↓ 选择设置项，← → Enter 空格 切换取值
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
