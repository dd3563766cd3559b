//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::colors;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 去掉外边距后的内部区域
fn inset(area: Rect, horizontal: u16, vertical: u16) -> Rect {
    Rect::new(
        area.x + horizontal,
        area.y + vertical,
        area.width.saturating_sub(horizontal * 2),
        area.height.saturating_sub(vertical * 2),
    )
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let c = colors();
    let area = centered_rect(60, 10, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.error))
        .style(Style::default().bg(c.bg));

    frame.render_widget(block, area);

    let lines = vec![
        Line::styled(message, Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled("Esc / Enter", Style::default().fg(c.muted)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inset(area, 2, 2));
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let help = &texts.help;
    let c = colors();

    let area = centered_rect(56, 22, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", help.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.highlight))
        .style(Style::default().bg(c.bg));

    frame.render_widget(block, area);

    let heading = Style::default()
        .fg(c.highlight)
        .add_modifier(Modifier::BOLD);
    let row = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), Style::default().fg(c.key)),
            Span::styled(desc, Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        Line::styled(help.global_shortcuts, heading),
        Line::from(""),
        row("Tab", help.actions.switch_panel),
        row("↑↓ / jk", help.actions.move_up_down),
        row("Enter", help.actions.confirm),
        row("Esc", help.actions.back_cancel),
        row("? / Alt+h", help.actions.help),
        row("Alt+q", help.actions.quit),
        Line::from(""),
        Line::styled(help.form_shortcuts, heading),
        Line::from(""),
        row("Enter", help.actions.submit),
        row("Ctrl+U", help.actions.clear_input),
        row("↑↓ PgUp/PgDn", help.actions.scroll),
        row("Alt+s", help.actions.export),
        row("Alt+v", help.actions.toggle_key),
        Line::from(""),
        Line::styled(help.close_hint, Style::default().fg(c.muted)),
    ];

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inset(area, 2, 1));
}
