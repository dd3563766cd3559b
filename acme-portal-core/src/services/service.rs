//! 挑战 / 签发服务

use std::sync::Arc;

use log::{info, warn};

use crate::error::{PortalError, PortalResult};
use crate::services::client::CertificateApi;
use crate::services::flow::{Flow, Ticket};
use crate::services::validation::validate_domains;
use crate::types::{ChallengeOrder, DomainList, IssuedCertificate, OrderId, Outcome};

/// 两个表单流程的服务入口
///
/// 网络错误、解析错误都被折叠成 [`Outcome::Failure`]，调用方只需存储结果。
pub struct PortalService<A: ?Sized> {
    api: Arc<A>,
}

impl<A: ?Sized> Clone for PortalService<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

impl<A: CertificateApi + ?Sized> PortalService<A> {
    /// 创建服务实例
    #[must_use]
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// 申请 DNS 挑战
    pub async fn challenge(&self, domains: &DomainList) -> Outcome<ChallengeOrder> {
        info!("[Portal] requesting challenge for {} domain(s)", domains.len());
        let result = self.api.request_challenge(domains).await;
        fold("challenge", result)
    }

    /// 签发证书
    pub async fn issue(&self, id: &OrderId) -> Outcome<IssuedCertificate> {
        info!("[Portal] requesting certificate for order {id}");
        let result = self.api.issue_certificate(id).await;
        fold("issue", result)
    }

    /// 完整的挑战流程：校验、进入忙碌、请求、写回结果
    ///
    /// 供能直接 await 的调用方使用。事件循环类的调用方先调用
    /// [`start_challenge`]，再把 [`challenge`](Self::challenge) 放到后台执行，
    /// 完成后凭票据 [`Flow::settle`]。
    pub async fn run_challenge(&self, flow: &mut Flow<ChallengeOrder>, raw: &str) {
        let Some((ticket, domains)) = start_challenge(flow, raw) else {
            return;
        };
        let outcome = self.challenge(&domains).await;
        flow.settle(ticket, outcome);
    }

    /// 完整的签发流程：解析 ID、进入忙碌、请求、写回结果
    ///
    /// 拆分方式同 [`run_challenge`](Self::run_challenge)，对应 [`start_issue`]。
    pub async fn run_issue(&self, flow: &mut Flow<IssuedCertificate>, raw: &str) {
        let Some((ticket, id)) = start_issue(flow, raw) else {
            return;
        };
        let outcome = self.issue(&id).await;
        flow.settle(ticket, outcome);
    }
}

/// 挑战流程的同步部分：校验域名，失败写入结果，通过则进入忙碌
pub fn start_challenge(
    flow: &mut Flow<ChallengeOrder>,
    raw: &str,
) -> Option<(Ticket, DomainList)> {
    flow.start(validate_domains(raw))
}

/// 签发流程的同步部分：解析 ID，失败写入结果，通过则进入忙碌
pub fn start_issue(flow: &mut Flow<IssuedCertificate>, raw: &str) -> Option<(Ticket, OrderId)> {
    flow.start(raw.parse::<OrderId>())
}

/// 把客户端结果折叠成可存储的 [`Outcome`]，顺带记录日志
fn fold<T>(operation: &str, result: PortalResult<Outcome<T>>) -> Outcome<T> {
    match result {
        Ok(outcome) => {
            if let Some(message) = outcome.failure_message() {
                warn!("[Portal] {operation} rejected by backend: {message}");
            }
            outcome
        }
        Err(e) => {
            log_failure(operation, &e);
            e.into()
        }
    }
}

fn log_failure(operation: &str, error: &PortalError) {
    if error.is_expected() {
        warn!("[Portal] {operation} failed: {error}");
    } else {
        log::error!("[Portal] {operation} failed: {error}");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_service, sample_certificate, sample_order};

    #[tokio::test]
    async fn challenge_success_is_stored_unmodified() {
        let (svc, api) = create_test_service();
        api.set_challenge(Ok(Outcome::Success(sample_order()))).await;

        let mut flow = Flow::new();
        svc.run_challenge(&mut flow, "example.com").await;

        assert!(!flow.is_busy());
        let order = flow.result().and_then(Outcome::success).unwrap();
        assert_eq!(order.id, "abc123");
        assert_eq!(order.dns.len(), 1);
        assert_eq!(order.dns[0].record_type, "TXT");
        assert_eq!(order.dns[0].record, "_acme");
        assert_eq!(order.dns[0].value, "xyz");
    }

    #[tokio::test]
    async fn challenge_sends_cleaned_domains() {
        let (svc, api) = create_test_service();
        api.set_challenge(Ok(Outcome::Success(sample_order()))).await;

        let mut flow = Flow::new();
        svc.run_challenge(&mut flow, " a.example.com , b.example.com,").await;

        assert_eq!(
            api.challenge_calls().await,
            vec![vec!["a.example.com".to_string(), "b.example.com".to_string()]]
        );
    }

    #[tokio::test]
    async fn validation_failure_skips_network() {
        let (svc, api) = create_test_service();

        let mut flow = Flow::new();
        svc.run_challenge(&mut flow, "bad domain, good.com").await;

        assert!(!flow.is_busy());
        assert_eq!(
            flow.result().and_then(Outcome::failure_message),
            Some("Invalid domain(s): bad domain")
        );
        assert!(api.challenge_calls().await.is_empty());
    }

    #[tokio::test]
    async fn blank_id_skips_network() {
        let (svc, api) = create_test_service();

        let mut flow = Flow::new();
        svc.run_issue(&mut flow, "   ").await;

        assert!(!flow.is_busy());
        assert_eq!(
            flow.result().and_then(Outcome::failure_message),
            Some("Please enter an ID")
        );
        assert!(api.issue_calls().await.is_empty());
    }

    #[tokio::test]
    async fn network_failure_in_both_flows() {
        let (svc, api) = create_test_service();
        api.set_challenge(Err(PortalError::Transport("network down".into())))
            .await;
        api.set_issue(Err(PortalError::Transport("network down".into())))
            .await;

        let mut challenge = Flow::new();
        svc.run_challenge(&mut challenge, "example.com").await;
        let mut issue = Flow::new();
        svc.run_issue(&mut issue, "abc123").await;

        assert!(!challenge.is_busy());
        assert!(!issue.is_busy());
        assert_eq!(
            challenge.result().and_then(Outcome::failure_message),
            Some("network down")
        );
        assert_eq!(
            issue.result().and_then(Outcome::failure_message),
            Some("network down")
        );
    }

    #[tokio::test]
    async fn issue_success_and_trimmed_id() {
        let (svc, api) = create_test_service();
        api.set_issue(Ok(Outcome::Success(sample_certificate()))).await;

        let mut flow = Flow::new();
        svc.run_issue(&mut flow, "  abc123  ").await;

        assert_eq!(api.issue_calls().await, vec!["abc123".to_string()]);
        let cert = flow.result().and_then(Outcome::success).unwrap();
        assert_eq!(cert.domains, vec!["example.com"]);
        assert!(!flow.is_busy());
    }

    #[tokio::test]
    async fn backend_error_body_is_stored() {
        let (svc, api) = create_test_service();
        api.set_issue(Ok(Outcome::failure("Order not ready"))).await;

        let mut flow = Flow::new();
        svc.run_issue(&mut flow, "abc123").await;

        assert_eq!(
            flow.result().and_then(Outcome::failure_message),
            Some("Order not ready")
        );
    }

    #[test]
    fn start_issue_rejects_path_separators_without_busy() {
        let mut flow = Flow::new();
        assert!(start_issue(&mut flow, "a/b").is_none());
        assert!(!flow.is_busy());
        assert!(flow
            .result()
            .and_then(Outcome::failure_message)
            .is_some_and(|m| m.starts_with("Invalid ID")));

        let (ticket, id) = start_issue(&mut flow, " abc123 ").unwrap();
        assert_eq!(id.as_str(), "abc123");
        assert_eq!(flow.latest_ticket(), ticket);
        assert!(flow.is_busy());
    }

    #[test]
    fn start_challenge_returns_cleaned_domains() {
        let mut flow = Flow::new();
        let (_, domains) = start_challenge(&mut flow, "a.example.com, ,b.example.com").unwrap();
        assert_eq!(domains.as_slice(), ["a.example.com", "b.example.com"]);
        assert!(flow.is_busy());
    }

    #[tokio::test]
    async fn out_of_order_completions_keep_latest() {
        let (svc, api) = create_test_service();
        let domains = validate_domains("example.com").unwrap();

        let mut flow: Flow<ChallengeOrder> = Flow::new();
        let first = flow.begin();
        let second = flow.begin();

        api.set_challenge(Ok(Outcome::Success(sample_order()))).await;
        let second_outcome = svc.challenge(&domains).await;
        api.set_challenge(Err(PortalError::Transport("timeout".into())))
            .await;
        let first_outcome = svc.challenge(&domains).await;

        assert!(flow.settle(second, second_outcome));
        assert!(!flow.settle(first, first_outcome));
        assert!(flow.result().is_some_and(Outcome::is_success));
    }
}
