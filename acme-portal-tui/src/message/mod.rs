//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event --> Update 之间的桥梁
//! 所有的用户操作和后台任务结果都通过 Message 来表达。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // AppMessage 主消息
//!         mod backend;        // BackendCommand / BackendMessage
//!         mod content;        // 内容面板子消息
//!         mod modal;          // 弹窗子消息
//!         mod navigation;     // 导航栏子消息
//!
//!
//!     消息的两个来源：
//!         · event/handler.rs  把按键翻译成 AppMessage
//!         · backend::PortalBackend  在任务完成后发送 BackendMessage，
//!           主循环将其包装为 AppMessage::Backend(...)
//!
//!     两者都在 app.rs 的主循环里交给 update::update() 处理。
//!
//!
//!     BackendCommand 方向相反：
//!         update::update() 返回 Option<BackendCommand>，
//!         主循环把它交给 Backend 层执行（网络请求、写文件）。
//!         Update 层本身从不做 I/O。
//!

mod app;
mod backend;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use backend::{BackendCommand, BackendMessage};
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
