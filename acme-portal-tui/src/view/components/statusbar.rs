//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel, Page};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点和页面生成快捷键提示
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" │ "));
        }
        spans.push(Span::styled(*key, Style::default().add_modifier(Modifier::BOLD)));
        spans.push(Span::raw(" "));
        spans.push(Span::raw(*desc));
    }

    // 如果有状态消息，显示在右侧
    let message = app
        .status_message
        .as_deref()
        .unwrap_or(t().status_bar.ready);
    spans.push(Span::raw(" │ "));
    spans.push(Span::styled(
        message.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ));

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;
    let mut hints = vec![(keys.tab, actions.switch_panel)];

    // 根据焦点位置显示不同的快捷键
    match app.focus {
        FocusPanel::Navigation => {
            hints.push((keys.arrows_ud, actions.navigate));
            hints.push((keys.enter, actions.open));
            hints.push(("?", actions.help));
        }
        FocusPanel::Content => match app.current_page {
            Page::Challenge => {
                hints.push((keys.enter, actions.submit));
                hints.push(("Ctrl+U", actions.clear));
                hints.push((keys.arrows_ud, actions.scroll));
                hints.push((keys.esc, actions.back));
            }
            Page::Issue => {
                hints.push((keys.enter, actions.submit));
                hints.push((keys.arrows_ud, actions.scroll));
                if app.issue.certificate().is_some() {
                    hints.push(("Alt+s", actions.export));
                    hints.push(("Alt+v", actions.toggle_key));
                }
                hints.push((keys.esc, actions.back));
            }
            Page::Settings => {
                hints.push((keys.arrows_ud, actions.navigate));
                hints.push((keys.arrows_lr, actions.switch_option));
                hints.push((keys.esc, actions.back));
            }
        },
    }

    hints.push(("Alt+q", actions.quit));

    hints
}
