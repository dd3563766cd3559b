//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod backend;        // 后台任务完成消息
//!         mod content;        // 内容面板（表单、设置）
//!         mod modal;          // 弹窗
//!         mod navigation;     // 导航栏
//!
//!
//!     update() 不做任何 I/O：
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Option<BackendCommand>
//!
//!     需要网络或文件系统时，返回一条 BackendCommand，
//!     由 app.rs 主循环交给 backend::PortalBackend 执行。
//!     这样整个 Update 层可以直接在单元测试里驱动。
//!
//!
//!     表单提交（update/content.rs）：
//!
//!         Enter
//!           ├─ flow 正在忙：状态栏提示，忽略本次提交
//!           ├─ 校验失败：flow.reject()，结果区显示错误，不发请求
//!           └─ 校验通过：flow.begin() 拿到票据 → BackendCommand
//!
//!     请求完成（update/backend.rs）：
//!
//!         BackendMessage::*Completed { ticket, outcome }
//!           ├─ 票据是最新的：写入结果，清除忙碌
//!           └─ 票据已过期：丢弃
//!

mod backend;
mod content;
mod modal;
mod navigation;

use crate::message::{AppMessage, BackendCommand};
use crate::model::{App, FocusPanel};

/// 处理应用消息，更新状态
///
/// 返回需要 Backend 层执行的副作用。
pub fn update(app: &mut App, msg: AppMessage) -> Option<BackendCommand> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            return content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Backend(backend_msg) => {
            backend::update(app, backend_msg);
        }

        AppMessage::GoBack => {
            // 如果有弹窗打开，先关闭弹窗
            if app.modal.is_open() {
                app.modal.close();
            } else if app.focus.is_content() {
                app.focus = FocusPanel::Navigation;
            }
            app.clear_status();
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::Noop => {}
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::ModalMessage;

    #[test]
    fn go_back_closes_modal_before_leaving_content() {
        let mut app = App::default();
        app.focus = FocusPanel::Content;
        app.modal.show_help();

        update(&mut app, AppMessage::GoBack);
        assert!(!app.modal.is_open());
        assert_eq!(app.focus, FocusPanel::Content);

        update(&mut app, AppMessage::GoBack);
        assert_eq!(app.focus, FocusPanel::Navigation);
    }

    #[test]
    fn focus_does_not_move_under_modal() {
        let mut app = App::default();
        app.modal.show_error("Export failed", "disk full");

        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.focus, FocusPanel::Navigation);

        update(&mut app, AppMessage::Modal(ModalMessage::Close));
        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.focus, FocusPanel::Content);
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = App::default();
        assert!(update(&mut app, AppMessage::Quit).is_none());
        assert!(app.should_quit);
    }
}
