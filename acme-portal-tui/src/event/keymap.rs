//! 快捷键配置
//!
//! 定义快捷键映射。表单页上的普通字符都是输入，
//! 所以内容面板的操作键一律带修饰键。

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const TOGGLE_FOCUS: KeyBinding = KeyBinding::key(KeyCode::Tab);

    // 表单
    pub const SUBMIT: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const CLEAR_INPUT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('u'));
    pub const ACTION_EXPORT: KeyBinding = KeyBinding::alt(KeyCode::Char('s'));
    pub const TOGGLE_PRIVATE_KEY: KeyBinding = KeyBinding::alt(KeyCode::Char('v'));
}
