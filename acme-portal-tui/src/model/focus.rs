//! 焦点状态定义

/// 当前接收按键的面板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧导航
    #[default]
    Navigation,
    /// 右侧表单 / 设置
    Content,
}

impl FocusPanel {
    /// 左右互换
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Navigation => Self::Content,
            Self::Content => Self::Navigation,
        }
    }

    pub fn is_navigation(self) -> bool {
        self == Self::Navigation
    }

    pub fn is_content(self) -> bool {
        self == Self::Content
    }
}
