//! 后台任务完成消息的更新逻辑

use crate::i18n::t;
use crate::message::BackendMessage;
use crate::model::App;

/// 处理后台任务完成消息
pub fn update(app: &mut App, msg: BackendMessage) {
    match msg {
        BackendMessage::ChallengeCompleted { ticket, outcome } => {
            let success = outcome.is_success();
            if app.challenge.flow.settle(ticket, outcome) {
                app.challenge.scroll = 0;
                request_status(app, success, t().status_bar.challenge_received);
            }
        }

        BackendMessage::IssueCompleted { ticket, outcome } => {
            let success = outcome.is_success();
            if app.issue.settle(ticket, outcome) {
                request_status(app, success, t().status_bar.certificate_received);
            }
        }

        BackendMessage::ExportCompleted(result) => {
            app.issue.exporting = false;
            match result {
                Ok(exported) => {
                    log::info!("[UI] exported {} file(s)", exported.files.len());
                    app.set_status(format!(
                        "{} {}",
                        t().status_bar.exported,
                        exported.dir.display()
                    ));
                }
                Err(message) => {
                    app.modal.show_error(t().modal.export_failed, &message);
                }
            }
        }

        BackendMessage::ConfigSaved(result) => match result {
            Ok(()) => app.set_status(t().status_bar.settings_saved),
            Err(message) => app.modal.show_error(t().modal.save_failed, &message),
        },
    }
}

/// 结果本身显示在结果区，状态栏只给一句提示
fn request_status(app: &mut App, success: bool, success_text: &str) {
    if success {
        app.set_status(success_text);
    } else {
        app.set_status(t().status_bar.request_failed);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use std::path::PathBuf;

    use acme_portal_core::{
        ChallengeOrder, DnsChallengeRecord, ExportedFiles, IssuedCertificate, Outcome, Ticket,
    };

    use super::*;
    use crate::model::Modal;

    const LEAF: &str = "-----BEGIN CERTIFICATE-----\nLEAF\n-----END CERTIFICATE-----\n";
    const INTERMEDIATE: &str = "-----BEGIN CERTIFICATE-----\nMID\n-----END CERTIFICATE-----\n";

    /// 像在输入框里键入 ID 后提交一样拿到签发票据
    fn begin_issue(app: &mut App, id: &str) -> Ticket {
        app.issue.input.clear();
        for ch in id.chars() {
            app.issue.input.push(ch);
        }
        app.issue.start().expect("valid order id").0
    }

    fn order() -> ChallengeOrder {
        ChallengeOrder {
            id: "abc123".into(),
            dns: vec![DnsChallengeRecord {
                record_type: "TXT".into(),
                record: "_acme".into(),
                value: "xyz".into(),
            }],
        }
    }

    #[test]
    fn challenge_result_is_stored_unmodified() {
        let mut app = App::default();
        let ticket = app.challenge.flow.begin();

        update(
            &mut app,
            BackendMessage::ChallengeCompleted {
                ticket,
                outcome: Outcome::Success(order()),
            },
        );

        assert!(!app.challenge.flow.is_busy());
        assert_eq!(
            app.challenge.flow.result(),
            Some(&Outcome::Success(order()))
        );
        assert!(app.status_message.is_some());
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut app = App::default();
        let old = app.challenge.flow.begin();
        let latest = app.challenge.flow.begin();

        update(
            &mut app,
            BackendMessage::ChallengeCompleted {
                ticket: old,
                outcome: Outcome::failure("timeout"),
            },
        );
        assert!(app.challenge.flow.is_busy());
        assert!(app.challenge.flow.result().is_none());

        update(
            &mut app,
            BackendMessage::ChallengeCompleted {
                ticket: latest,
                outcome: Outcome::Success(order()),
            },
        );
        assert!(!app.challenge.flow.is_busy());
        assert!(app.challenge.flow.result().is_some_and(Outcome::is_success));
    }

    #[test]
    fn network_failure_in_both_flows() {
        let mut app = App::default();
        let challenge = app.challenge.flow.begin();
        let issue = begin_issue(&mut app, "abc123");

        update(
            &mut app,
            BackendMessage::ChallengeCompleted {
                ticket: challenge,
                outcome: Outcome::failure("network down"),
            },
        );
        update(
            &mut app,
            BackendMessage::IssueCompleted {
                ticket: issue,
                outcome: Outcome::failure("network down"),
            },
        );

        assert!(!app.challenge.flow.is_busy());
        assert!(!app.issue.flow.is_busy());
        assert_eq!(
            app.challenge.flow.result().and_then(Outcome::failure_message),
            Some("network down")
        );
        assert_eq!(
            app.issue.flow.result().and_then(Outcome::failure_message),
            Some("network down")
        );
        assert!(app.issue.rendered.is_none());
    }

    #[test]
    fn issued_chain_is_split_for_display() {
        let mut app = App::default();
        let ticket = begin_issue(&mut app, "abc123");

        update(
            &mut app,
            BackendMessage::IssueCompleted {
                ticket,
                outcome: Outcome::Success(IssuedCertificate {
                    message: "Certificate issued".into(),
                    domains: vec!["example.com".into()],
                    certificate: format!("{LEAF}{INTERMEDIATE}"),
                    private_key: "KEY".into(),
                }),
            },
        );

        let rendered = app.issue.rendered.as_ref().unwrap();
        assert_eq!(rendered.chain.leaf, LEAF.trim());
        assert_eq!(rendered.chain.bundle, INTERMEDIATE.trim());
        // 测试用的 PEM 不是真实证书，解析结果为空
        assert!(rendered.leaf_summary().is_none());
        assert_eq!(app.issue.order_id.as_ref().map(|id| id.as_str()), Some("abc123"));
        assert!(!app.issue.show_private_key);
    }

    #[test]
    fn export_failure_opens_error_modal() {
        let mut app = App::default();
        app.issue.exporting = true;

        update(
            &mut app,
            BackendMessage::ExportCompleted(Err("Storage error: read-only".into())),
        );

        assert!(!app.issue.exporting);
        assert!(matches!(
            app.modal.active,
            Some(Modal::Error { ref message, .. }) if message == "Storage error: read-only"
        ));
    }

    #[test]
    fn export_success_reports_directory() {
        let mut app = App::default();
        app.issue.exporting = true;

        update(
            &mut app,
            BackendMessage::ExportCompleted(Ok(ExportedFiles {
                dir: PathBuf::from("/tmp/certs/abc123"),
                files: vec![PathBuf::from("/tmp/certs/abc123/cert.pem")],
            })),
        );

        assert!(!app.issue.exporting);
        assert!(app
            .status_message
            .as_deref()
            .is_some_and(|s| s.ends_with("/tmp/certs/abc123")));
    }
}
