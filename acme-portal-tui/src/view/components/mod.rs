//! 通用 UI 组件

pub mod form;
pub mod modal;
pub mod navigation;
pub mod statusbar;
