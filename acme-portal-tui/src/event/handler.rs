//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变时下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }

        // Enter: 确认选择
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),

        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),

        // End: 跳到最后一项
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),

        // ?: 帮助（表单页上 ? 是普通输入，所以只在导航栏生效）
        KeyCode::Char('?') => AppMessage::ShowHelp,

        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    match app.current_page {
        Page::Challenge => handle_form_keys(key, false),
        Page::Issue => handle_form_keys(key, true),
        Page::Settings => handle_settings_keys(key),
    }
}

/// 处理表单页的按键
///
/// `with_result_actions` 为 `true` 时启用导出和私钥显示。
fn handle_form_keys(key: KeyEvent, with_result_actions: bool) -> AppMessage {
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Submit);
    }
    if DefaultKeymap::CLEAR_INPUT.matches(&key) {
        return AppMessage::Content(ContentMessage::ClearInput);
    }
    if with_result_actions {
        if DefaultKeymap::ACTION_EXPORT.matches(&key) {
            return AppMessage::Content(ContentMessage::Export);
        }
        if DefaultKeymap::TOGGLE_PRIVATE_KEY.matches(&key) {
            return AppMessage::Content(ContentMessage::TogglePrivateKey);
        }
    }

    match key.code {
        KeyCode::Backspace => AppMessage::Content(ContentMessage::Backspace),
        KeyCode::Up => AppMessage::Content(ContentMessage::ScrollUp),
        KeyCode::Down => AppMessage::Content(ContentMessage::ScrollDown),
        KeyCode::PageUp => AppMessage::Content(ContentMessage::PageUp),
        KeyCode::PageDown => AppMessage::Content(ContentMessage::PageDown),

        // 字符输入（允许 Shift，用于大写和符号）
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Content(ContentMessage::Input(ch))
        }

        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
///
/// 帮助和错误弹窗只响应关闭按键。
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c'))
        | (KeyModifiers::NONE, KeyCode::Esc | KeyCode::Enter) => {
            AppMessage::Modal(ModalMessage::Close)
        }
        _ => AppMessage::Noop,
    }
}

/// 处理设置页面的按键
fn handle_settings_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上一个设置项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        // ↓ 或 j: 下一个设置项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        // ← → Enter 空格: 切换取值（两个设置项都只有两个取值）
        KeyCode::Left | KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => {
            AppMessage::Content(ContentMessage::Toggle)
        }
        _ => AppMessage::Noop,
    }
}
