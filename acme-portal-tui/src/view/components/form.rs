//! 表单页共用的部件：输入框、提交按钮、结果区

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::i18n::t;
use crate::model::state::InputField;
use crate::view::theme::{colors, Styles};

/// 表单页的各个区域
pub struct FormAreas {
    pub label: Rect,
    pub input: Rect,
    pub submit: Rect,
    pub result: Rect,
}

/// 切分表单页：标签、输入框、提交按钮、空行、结果区
pub fn split(area: Rect) -> FormAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    FormAreas {
        label: rows[0],
        input: rows[1],
        submit: rows[2],
        result: rows[4],
    }
}

/// 渲染输入框
///
/// 内容超出宽度时只显示末尾部分，光标固定在末尾。
pub fn render_input(
    frame: &mut Frame,
    areas: &FormAreas,
    label: &str,
    placeholder: &str,
    input: &InputField,
    focused: bool,
) {
    let c = colors();

    frame.render_widget(
        Paragraph::new(Line::styled(format!(" {label}"), Styles::title())),
        areas.label,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));
    let inner = block.inner(areas.input);
    frame.render_widget(block, areas.input);

    // 留一列给光标
    let visible_width = usize::from(inner.width.saturating_sub(1));
    let (visible, visible_cols) = tail_fitting(input.as_str(), visible_width);

    let line = if input.is_empty() {
        Line::styled(placeholder.to_string(), Style::default().fg(c.muted))
    } else {
        Line::styled(visible.to_string(), Style::default().fg(c.fg))
    };
    frame.render_widget(Paragraph::new(line), inner);

    if focused {
        let cols = u16::try_from(visible_cols).unwrap_or(inner.width);
        frame.set_cursor_position(Position::new(inner.x + cols, inner.y));
    }
}

/// `text` 末尾不超过 `width` 列的部分及其列宽
fn tail_fitting(text: &str, width: usize) -> (&str, usize) {
    let mut cols = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if cols + w > width {
            break;
        }
        cols += w;
        start = idx;
    }
    (&text[start..], cols)
}

/// 渲染提交按钮
pub fn render_submit(frame: &mut Frame, area: Rect, busy: bool) {
    let c = colors();
    let common = &t().common;
    let (label, style) = if busy {
        (common.submitting, Style::default().fg(c.muted))
    } else {
        (
            common.submit,
            Style::default()
                .bg(c.highlight)
                .fg(c.selected_fg)
                .add_modifier(Modifier::BOLD),
        )
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(format!(" {label} "), style),
        ])),
        area,
    );
}

/// 失败结果的显示行
pub fn failure_lines(message: &str) -> Vec<Line<'static>> {
    let c = colors();
    vec![Line::from(vec![
        Span::styled(
            format!("{} ", t().common.error_prefix),
            Style::default().fg(c.error).add_modifier(Modifier::BOLD),
        ),
        Span::styled(message.to_string(), Style::default().fg(c.error)),
    ])]
}

/// 小节标题行
pub fn section(title: &str) -> Line<'static> {
    Line::styled(title.to_string(), Styles::section())
}

/// 标签列宽（按显示宽度对齐）
const FIELD_LABEL_WIDTH: usize = 18;

/// `标签  值` 形式的一行
pub fn field(label: &str, value: impl Into<String>, value_style: Style) -> Line<'static> {
    let padding = FIELD_LABEL_WIDTH.saturating_sub(label.width());
    Line::from(vec![
        Span::styled(
            format!("  {label}{:padding$}", ""),
            Style::default().fg(colors().muted),
        ),
        Span::styled(value.into(), value_style),
    ])
}

/// 多行文本（PEM 等）原样显示
pub fn text_block(text: &str) -> Vec<Line<'static>> {
    let style = Style::default().fg(colors().fg);
    text.lines()
        .map(|line| Line::styled(line.to_string(), style))
        .collect()
}

/// 渲染可滚动的结果区
///
/// 滚动偏移不会超过最后一行。
pub fn render_result(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>, scroll: u16) {
    let max = u16::try_from(lines.len().saturating_sub(1)).unwrap_or(u16::MAX);
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll.min(max), 0));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_fitting_keeps_end() {
        assert_eq!(tail_fitting("example.com", 20), ("example.com", 11));
        assert_eq!(tail_fitting("example.com", 3), ("com", 3));
        assert_eq!(tail_fitting("", 3), ("", 0));
    }

    #[test]
    fn tail_fitting_counts_wide_chars() {
        // 每个汉字占两列
        assert_eq!(tail_fitting("域名域名", 5), ("域名", 4));
    }
}
