//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//! 每一帧都从头绘制，ratatui 负责差量输出到终端。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局：标题栏 + 导航 / 内容 + 状态栏
//!         pub mod theme;          // 颜色方案（深色 / 浅色）
//!         mod components;         // 导航栏、状态栏、弹窗
//!         mod pages;              // 挑战、签发、设置页面
//!
//!
//!     ┌──────────────────────────── 标题栏 ─────────────────────────────┐
//!     ├─────────────┬──────────────────────────────────────────────────┤
//!     │  导航 20%   │  内容 80%                                         │
//!     │             │    输入框                                         │
//!     │  Challenge  │    提交按钮                                       │
//!     │  Issue      │    结果区（可滚动）                               │
//!     │  Settings   │                                                  │
//!     ├─────────────┴──────────────────────────────────────────────────┤
//!     └──────────────────────────── 状态栏 ─────────────────────────────┘
//!
//!     弹窗最后绘制，覆盖在最上层。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

use ratatui::Frame;

use crate::model::App;

/// 渲染一帧
pub fn render(app: &App, frame: &mut Frame) {
    layout::render(app, frame);
}
