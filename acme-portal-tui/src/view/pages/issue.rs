//! 签发页面视图
//!
//! 成功时依次显示：消息、域名、叶子证书（含解析出的详情）、
//! 中间证书链（仅当存在时）、私钥（默认隐藏）。

use acme_portal_core::{CertificateSummary, IssuedCertificate, Outcome};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, IssueState, RenderedCertificate};
use crate::view::components::form;
use crate::view::theme::colors;

/// 渲染签发页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().issue;
    let state = &app.issue;
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
        Some(Outcome::Success(certificate)) => certificate_lines(state, certificate),
        Some(Outcome::Failure { message }) => form::failure_lines(message),
        None => Vec::new(),
    };
    form::render_result(frame, areas.result, lines, state.scroll);
}

fn certificate_lines(state: &IssueState, certificate: &IssuedCertificate) -> Vec<Line<'static>> {
    let texts = &t().issue;
    let c = colors();
    let value = Style::default().fg(c.fg);

    let mut lines = Vec::new();

    if state.exporting {
        lines.push(Line::styled(
            texts.exporting.to_string(),
            Style::default().fg(c.warning),
        ));
        lines.push(Line::from(""));
    }

    if !certificate.message.is_empty() {
        lines.push(form::field(
            texts.message,
            certificate.message.clone(),
            Style::default().fg(c.success).add_modifier(Modifier::BOLD),
        ));
    }
    if !certificate.domains.is_empty() {
        lines.push(form::field(
            texts.domains,
            certificate.domains.join(", "),
            value,
        ));
    }

    if let Some(rendered) = &state.rendered {
        lines.extend(chain_lines(rendered));
    }

    lines.push(Line::from(""));
    lines.push(form::section(texts.private_key));
    if state.show_private_key {
        lines.extend(form::text_block(&certificate.private_key));
    } else {
        lines.push(Line::styled(
            format!("  {}", texts.private_key_hidden),
            Style::default().fg(c.muted),
        ));
    }

    lines
}

/// 叶子证书和中间证书链
fn chain_lines(rendered: &RenderedCertificate) -> Vec<Line<'static>> {
    let texts = &t().issue;
    let mut lines = vec![Line::from(""), form::section(texts.leaf)];

    if let Some(summary) = rendered.leaf_summary() {
        lines.extend(summary_lines(summary));
        lines.push(Line::from(""));
    }
    lines.extend(form::text_block(&rendered.chain.leaf));

    if rendered.chain.has_bundle() {
        lines.push(Line::from(""));
        lines.push(form::section(texts.bundle));
        lines.extend(form::text_block(&rendered.chain.bundle));
    }
    lines
}

/// 证书详情
fn summary_lines(summary: &CertificateSummary) -> Vec<Line<'static>> {
    let details = &t().issue.details;
    let c = colors();
    let value = Style::default().fg(c.fg);

    let mut lines = vec![
        form::field(details.subject, summary.subject.clone(), value),
        form::field(details.issuer, summary.issuer.clone(), value),
    ];
    if !summary.san.is_empty() {
        lines.push(form::field(details.san, summary.san.join(", "), value));
    }
    lines.push(form::field(details.not_before, summary.not_before.clone(), value));
    lines.push(form::field(details.not_after, summary.not_after.clone(), value));

    lines.push(if summary.is_expired {
        form::field(
            details.days_remaining,
            details.expired,
            Style::default().fg(c.error).add_modifier(Modifier::BOLD),
        )
    } else {
        let style = if summary.days_remaining < 30 {
            Style::default().fg(c.warning)
        } else {
            Style::default().fg(c.success)
        };
        form::field(details.days_remaining, summary.days_remaining.to_string(), style)
    });

    lines.push(form::field(
        details.fingerprint,
        summary.fingerprint_sha256.clone(),
        Style::default().fg(c.muted),
    ));
    lines
}
