//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含数据结构和不涉及 I/O 的小工具方法，
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Navigation / Content）
//!         mod navigation;     // 导航栏状态
//!         mod page;           // 页面路由状态
//!
//!         pub mod state;      // 页面数据状态
//!
//!     Page 只标识当前位置（Challenge / Issue / Settings），
//!     state/ 下的结构体保存每个页面的输入、请求状态和结果。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 表单流程
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     ChallengeState / IssueState 各持有一个 acme_portal_core::Flow：
//!
//!         Flow {
//!             busy,       // 是否有请求在途，只属于本页面
//!             latest,     // 最近发出的票据
//!             result,     // 最近一次提交的结果（成功 / 失败）
//!         }
//!
//!     数据流：
//!         用户在内容面板按 Enter
//!             ↓
//!         update/content.rs 校验输入
//!             ├─ 失败：flow.reject()，结果区直接显示错误
//!             └─ 成功：flow.begin() 得到票据，返回 BackendCommand
//!                 ↓
//!         app.rs 把命令交给 backend::PortalBackend，在 tokio 上执行
//!                 ↓
//!         完成后 BackendMessage 带着票据回到主循环
//!                 ↓
//!         update/backend.rs 调用 flow.settle()，过期票据被丢弃
//!

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavItemId, NavigationState};
pub use page::Page;
pub use state::{
    ChallengeState, IssueState, Modal, ModalState, RenderedCertificate, SettingItem,
    SettingsState, Theme,
};
