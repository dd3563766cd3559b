//! 左侧导航面板组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, NavItemId};
use crate::view::theme::{colors, Styles};

/// 渲染导航面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", texts.common.app_name))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_navigation()));

    // 构建导航项列表
    let items: Vec<ListItem> = app
        .navigation
        .items
        .iter()
        .enumerate()
        .map(|(i, nav_item)| {
            let is_selected = i == app.navigation.selected;
            let is_current = nav_item.id.page() == app.current_page;
            let prefix = if is_selected { "▶ " } else { "  " };

            // 根据导航项 ID 获取翻译后的标签
            let label = match nav_item.id {
                NavItemId::Challenge => texts.nav.challenge,
                NavItemId::Issue => texts.nav.issue,
                NavItemId::Settings => texts.nav.settings,
            };

            // 有请求在途的页面加一个标记
            let busy = match nav_item.id {
                NavItemId::Challenge => app.challenge.flow.is_busy(),
                NavItemId::Issue => app.issue.flow.is_busy(),
                NavItemId::Settings => false,
            };
            let suffix = if busy { " …" } else { "" };

            let content = format!("{prefix}{} {label}{suffix}", nav_item.icon);

            let style = if is_selected {
                Style::default()
                    .bg(c.selected_bg)
                    .fg(c.selected_fg)
                    .add_modifier(Modifier::BOLD)
            } else if is_current {
                Style::default().fg(c.highlight)
            } else {
                Style::default().fg(c.fg)
            };

            ListItem::new(Line::from(Span::styled(content, style)))
        })
        .collect();

    let list = List::new(items).block(block);

    // 使用 ListState 来跟踪选中状态
    let mut state = ListState::default();
    state.select(Some(app.navigation.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
