//! 导航更新逻辑

use crate::message::NavigationMessage;
use crate::model::{App, FocusPanel};

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.navigation.select_previous();
        }

        NavigationMessage::SelectNext => {
            app.navigation.select_next();
        }

        NavigationMessage::Confirm => {
            if let Some(id) = app.navigation.current_id() {
                app.current_page = id.page();
                // 进入页面后直接可以输入
                app.focus = FocusPanel::Content;
                app.clear_status(); // 切换页面时清除状态消息
            }
        }

        NavigationMessage::SelectFirst => {
            app.navigation.select_first();
        }

        NavigationMessage::SelectLast => {
            app.navigation.select_last();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Page;

    #[test]
    fn confirm_opens_page_and_focuses_content() {
        let mut app = App::default();
        update(&mut app, NavigationMessage::SelectNext);
        update(&mut app, NavigationMessage::Confirm);

        assert_eq!(app.current_page, Page::Issue);
        assert_eq!(app.focus, FocusPanel::Content);
    }

    #[test]
    fn selection_alone_keeps_page() {
        let mut app = App::default();
        update(&mut app, NavigationMessage::SelectLast);

        assert_eq!(app.current_page, Page::Challenge);
        assert_eq!(app.focus, FocusPanel::Navigation);
    }
}
