//! 页面视图

pub mod challenge;
pub mod issue;
pub mod settings;
