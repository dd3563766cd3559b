//! 应用主状态结构

use super::{
    ChallengeState, FocusPanel, IssueState, ModalState, NavigationState, Page, SettingsState,
};
use crate::backend::AppConfig;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 启动时加载的配置（设置页修改后同步）
    pub config: AppConfig,

    // === 各页面状态 ===
    /// 挑战页面状态
    pub challenge: ChallengeState,
    /// 签发页面状态
    pub issue: IssueState,
    /// 设置页面状态
    pub settings: SettingsState,

    /// 弹窗状态
    pub modal: ModalState,
}

impl App {
    /// 根据配置创建应用实例
    pub fn new(config: AppConfig) -> Self {
        let settings = SettingsState::new(config.theme(), config.language());
        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Challenge,
            status_message: None,
            config,
            challenge: ChallengeState::new(),
            issue: IssueState::new(),
            settings,
            modal: ModalState::new(),
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
