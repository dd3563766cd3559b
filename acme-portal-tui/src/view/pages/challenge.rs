//! 挑战页面视图

use acme_portal_core::{ChallengeOrder, Outcome};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::components::form;
use crate::view::theme::colors;

/// 渲染挑战页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().challenge;
    let state = &app.challenge;
    let areas = form::split(area);

    form::render_input(
        frame,
        &areas,
        texts.input_label,
        texts.placeholder,
        &state.input,
        app.focus.is_content() && !app.modal.is_open(),
    );
    form::render_submit(frame, areas.submit, state.flow.is_busy());

    let lines = match state.flow.result() {
        Some(Outcome::Success(order)) => order_lines(order),
        Some(Outcome::Failure { message }) => form::failure_lines(message),
        None => Vec::new(),
    };
    form::render_result(frame, areas.result, lines, state.scroll);
}

/// 成功结果：请求 ID 和需要添加的 DNS 记录
fn order_lines(order: &ChallengeOrder) -> Vec<Line<'static>> {
    let texts = &t().challenge;
    let c = colors();
    let value = Style::default().fg(c.fg);

    let mut lines = vec![
        Line::styled(
            texts.success.to_string(),
            Style::default().fg(c.success).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        form::field(
            texts.request_id,
            order.id.clone(),
            value.add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        form::section(texts.dns_records),
    ];

    if order.dns.is_empty() {
        lines.push(Line::styled(
            format!("  {}", texts.no_records),
            Style::default().fg(c.muted),
        ));
        return lines;
    }

    for (i, record) in order.dns.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(form::field(texts.col_type, record.record_type.clone(), value));
        lines.push(form::field(texts.col_record, record.record.clone(), value));
        lines.push(form::field(texts.col_value, record.value.clone(), value));
    }

    lines
}
