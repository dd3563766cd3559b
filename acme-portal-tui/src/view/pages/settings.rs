//! 设置页面视图

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::{App, SettingItem, Theme};
use crate::view::components::form;
use crate::view::theme::{colors, Styles};

/// 设置项的标签宽度（用于对齐，基于显示宽度）
const LABEL_WIDTH: usize = 20;
/// 值区域的宽度（包含 < > 符号）
const VALUE_WIDTH: usize = 20;

/// 渲染设置页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let settings = &app.settings;

    let mut lines = vec![Line::from("")];

    for (index, item) in SettingItem::all().iter().enumerate() {
        let (label, value) = match item {
            SettingItem::Theme => (
                texts.settings.theme.label,
                match settings.theme {
                    Theme::Dark => texts.settings.theme.dark,
                    Theme::Light => texts.settings.theme.light,
                },
            ),
            SettingItem::Language => (
                texts.settings.language.label,
                settings.language.display_name(),
            ),
        };
        lines.push(render_setting_row(
            label,
            value,
            settings.selected_index == index,
        ));
    }

    // === 只读配置 ===
    let readonly = &texts.settings.readonly;
    let config = &app.config;
    let value = Style::default().fg(c.fg);

    lines.push(Line::from(""));
    lines.push(form::section(readonly.section));
    lines.push(match config.api_url() {
        Some(url) => form::field(readonly.api_url, url, value),
        None => form::field(
            readonly.api_url,
            texts.common.not_configured,
            Style::default().fg(c.warning),
        ),
    });
    lines.push(form::field(
        readonly.timeout,
        format!("{}{}", config.timeout().as_secs(), readonly.seconds),
        value,
    ));
    lines.push(form::field(
        readonly.output_dir,
        config.output_dir().display().to_string(),
        value,
    ));

    lines.push(Line::from(""));

    // 操作提示
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;
    lines.push(Line::from(vec![
        Span::styled(format!("  {}", keys.arrows_ud), Styles::hint_key()),
        Span::styled(format!(" {} | ", actions.navigate), Styles::hint_desc()),
        Span::styled(keys.arrows_lr, Styles::hint_key()),
        Span::styled(format!(" {} | ", actions.switch_option), Styles::hint_desc()),
        Span::styled(keys.tab, Styles::hint_key()),
        Span::styled(format!(" {}", actions.switch_panel), Styles::hint_desc()),
    ]));

    frame.render_widget(Paragraph::new(lines), area);
}

/// 渲染单行设置项
fn render_setting_row<'a>(label: &'a str, value: &'a str, is_selected: bool) -> Line<'a> {
    let c = colors();
    let prefix = if is_selected { "▶ " } else { "  " };

    let label_style = if is_selected {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };

    let value_style = if is_selected {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.highlight)
    };

    // 使用 unicode-width 计算显示宽度
    let label_padding = LABEL_WIDTH.saturating_sub(label.width());

    // 计算值的填充（居中显示在 < > 之间）
    let value_width = value.width();
    let available_space = VALUE_WIDTH.saturating_sub(4); // 减去 "< " 和 " >" 的空间
    let left_padding = (available_space.saturating_sub(value_width)) / 2;
    let right_padding = available_space
        .saturating_sub(value_width)
        .saturating_sub(left_padding);

    // 未选中时用空格占位，保持对齐
    let (left_arrow, right_arrow) = if is_selected {
        ("◀ ", " ▶")
    } else {
        ("  ", "  ")
    };

    Line::from(vec![
        Span::styled(prefix, label_style),
        Span::styled(format!("  {label}"), label_style),
        Span::raw(format!("{:width$}", "", width = label_padding)),
        Span::styled(": ", Style::default().fg(c.muted)),
        Span::styled(left_arrow, Style::default().fg(c.key)),
        Span::raw(format!("{:width$}", "", width = left_padding)),
        Span::styled(value, value_style),
        Span::raw(format!("{:width$}", "", width = right_padding)),
        Span::styled(right_arrow, Style::default().fg(c.key)),
    ])
}
