//! 内容面板更新逻辑

use acme_portal_core::start_challenge;

use crate::i18n::{set_language, t};
use crate::message::{BackendCommand, ContentMessage};
use crate::model::state::InputField;
use crate::model::{App, Page};

/// PgUp / PgDn 一次滚动的行数
const PAGE_LINES: u16 = 10;

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) -> Option<BackendCommand> {
    match msg {
        // ========== 输入框 ==========
        ContentMessage::Input(ch) => {
            if let Some(input) = current_input(app) {
                input.push(ch);
            }
            None
        }
        ContentMessage::Backspace => {
            if let Some(input) = current_input(app) {
                input.backspace();
            }
            None
        }
        ContentMessage::ClearInput => {
            if let Some(input) = current_input(app) {
                input.clear();
            }
            None
        }
        ContentMessage::Submit => match app.current_page {
            Page::Challenge => submit_challenge(app),
            Page::Issue => submit_issue(app),
            Page::Settings => None,
        },

        // ========== 结果区 ==========
        ContentMessage::ScrollUp => {
            scroll(app, |s| s.saturating_sub(1));
            None
        }
        ContentMessage::ScrollDown => {
            scroll(app, |s| s.saturating_add(1));
            None
        }
        ContentMessage::PageUp => {
            scroll(app, |s| s.saturating_sub(PAGE_LINES));
            None
        }
        ContentMessage::PageDown => {
            scroll(app, |s| s.saturating_add(PAGE_LINES));
            None
        }
        ContentMessage::TogglePrivateKey => {
            if app.current_page == Page::Issue && app.issue.certificate().is_some() {
                app.issue.show_private_key = !app.issue.show_private_key;
            }
            None
        }
        ContentMessage::Export => handle_export(app),

        // ========== 设置页面 ==========
        ContentMessage::SelectPrevious => {
            if app.current_page == Page::Settings {
                app.settings.select_previous();
            }
            None
        }
        ContentMessage::SelectNext => {
            if app.current_page == Page::Settings {
                app.settings.select_next();
            }
            None
        }
        ContentMessage::Toggle => handle_toggle(app),
    }
}

fn current_input(app: &mut App) -> Option<&mut InputField> {
    match app.current_page {
        Page::Challenge => Some(&mut app.challenge.input),
        Page::Issue => Some(&mut app.issue.input),
        Page::Settings => None,
    }
}

fn scroll(app: &mut App, f: impl Fn(u16) -> u16) {
    match app.current_page {
        Page::Challenge => app.challenge.scroll = f(app.challenge.scroll),
        Page::Issue => app.issue.scroll = f(app.issue.scroll),
        Page::Settings => {}
    }
}

// ========== 表单提交 ==========

fn submit_challenge(app: &mut App) -> Option<BackendCommand> {
    if app.challenge.flow.is_busy() {
        app.set_status(t().status_bar.busy);
        return None;
    }

    let challenge = &mut app.challenge;
    challenge.scroll = 0;
    let (ticket, domains) = start_challenge(&mut challenge.flow, challenge.input.as_str())?;
    log::debug!("[UI] challenge #{} for {domains}", ticket.value());
    app.clear_status();
    Some(BackendCommand::RequestChallenge { ticket, domains })
}

fn submit_issue(app: &mut App) -> Option<BackendCommand> {
    if app.issue.flow.is_busy() {
        app.set_status(t().status_bar.busy);
        return None;
    }

    let (ticket, id) = app.issue.start()?;
    log::debug!("[UI] issue #{} for order {id}", ticket.value());
    app.clear_status();
    Some(BackendCommand::IssueCertificate { ticket, id })
}

// ========== 导出 ==========

fn handle_export(app: &mut App) -> Option<BackendCommand> {
    if app.current_page != Page::Issue {
        return None;
    }
    if app.issue.exporting {
        app.set_status(t().status_bar.export_in_progress);
        return None;
    }
    let Some(certificate) = app.issue.certificate().cloned() else {
        app.set_status(t().status_bar.nothing_to_export);
        return None;
    };

    let folder = app
        .issue
        .order_id
        .as_ref()
        .map_or_else(|| "certificate".to_string(), |id| dir_name(id.as_str()));
    let dir = app.config.output_dir().join(folder);

    app.issue.exporting = true;
    Some(BackendCommand::ExportCertificate { dir, certificate })
}

/// 把订单 ID 转成安全的目录名
///
/// 只保留字母、数字、`-`、`_`、`.`，其余替换为 `_`；
/// `.` 和 `..` 整体替换。
fn dir_name(id: &str) -> String {
    let name: String = id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if name.is_empty() || name.chars().all(|c| c == '.') {
        "_".to_string()
    } else {
        name
    }
}

// ========== 设置页面处理 ==========

fn handle_toggle(app: &mut App) -> Option<BackendCommand> {
    if app.current_page != Page::Settings {
        return None;
    }

    app.settings.toggle_current();
    let theme = app.settings.theme;
    let language = app.settings.language;

    // 同步到 view 层和翻译表
    crate::view::theme::set_theme_index(theme.index());
    set_language(language);

    app.config.theme = theme.code().to_string();
    app.config.language = language.code().to_string();
    Some(BackendCommand::SaveSettings { theme, language })
}
