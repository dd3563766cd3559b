//! 设置页面状态

use crate::i18n::Language;

/// 主题枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// 获取下一个主题（只有两个选项，前后相同）
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// 配置文件中的取值
    pub fn code(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// view 层使用的主题索引（0 = Dark, 1 = Light）
    pub fn index(self) -> u8 {
        match self {
            Self::Dark => 0,
            Self::Light => 1,
        }
    }
}

/// 设置项枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingItem {
    Theme,
    Language,
}

impl SettingItem {
    /// 获取所有设置项
    pub fn all() -> &'static [SettingItem] {
        &[SettingItem::Theme, SettingItem::Language]
    }
}

/// 设置页面状态
///
/// 只有主题和语言可在界面上修改，其余配置项只读展示。
#[derive(Debug, Default)]
pub struct SettingsState {
    /// 当前选中的设置项索引
    pub selected_index: usize,
    /// 当前主题
    pub theme: Theme,
    /// 当前语言
    pub language: Language,
}

impl SettingsState {
    pub fn new(theme: Theme, language: Language) -> Self {
        Self {
            selected_index: 0,
            theme,
            language,
        }
    }

    /// 选择上一个设置项（循环）
    pub fn select_previous(&mut self) {
        let count = SettingItem::all().len();
        self.selected_index = (self.selected_index + count - 1) % count;
    }

    /// 选择下一个设置项（循环）
    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % SettingItem::all().len();
    }

    /// 获取当前选中的设置项
    pub fn current_item(&self) -> Option<SettingItem> {
        SettingItem::all().get(self.selected_index).copied()
    }

    /// 切换当前设置项的取值
    ///
    /// 两个设置项都只有两个取值，向前和向后切换效果相同。
    pub fn toggle_current(&mut self) {
        match self.current_item() {
            Some(SettingItem::Theme) => self.theme = self.theme.toggle(),
            Some(SettingItem::Language) => self.language = self.language.next(),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_wraps() {
        let mut settings = SettingsState::default();
        settings.select_previous();
        assert_eq!(settings.current_item(), Some(SettingItem::Language));
        settings.select_next();
        assert_eq!(settings.current_item(), Some(SettingItem::Theme));
    }

    #[test]
    fn toggle_changes_selected_item_only() {
        let mut settings = SettingsState::default();
        settings.toggle_current();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.language, Language::EnUs);

        settings.select_next();
        settings.toggle_current();
        assert_eq!(settings.language, Language::ZhCn);
    }

    #[test]
    fn theme_codes() {
        assert_eq!(Theme::from_code(Theme::Light.code()), Some(Theme::Light));
        assert_eq!(Theme::from_code("solarized"), None);
    }
}
