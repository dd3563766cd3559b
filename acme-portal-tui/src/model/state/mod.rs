//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod challenge;
mod input;
mod issue;
mod modal;
mod settings;

pub use challenge::ChallengeState;
pub use input::InputField;
pub use issue::{IssueState, RenderedCertificate};
pub use modal::{Modal, ModalState};
pub use settings::{SettingItem, SettingsState, Theme};
