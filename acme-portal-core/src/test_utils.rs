//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{PortalError, PortalResult};
use crate::services::{CertificateApi, PortalService};
use crate::types::{
    ChallengeOrder, DnsChallengeRecord, DomainList, IssuedCertificate, OrderId, Outcome,
};

// ===== MockCertificateApi =====

/// 可配置应答的后端，并记录收到的请求
pub struct MockCertificateApi {
    challenge: RwLock<PortalResult<Outcome<ChallengeOrder>>>,
    issue: RwLock<PortalResult<Outcome<IssuedCertificate>>>,
    challenge_calls: RwLock<Vec<Vec<String>>>,
    issue_calls: RwLock<Vec<String>>,
}

impl MockCertificateApi {
    pub fn new() -> Self {
        Self {
            challenge: RwLock::new(Err(PortalError::Transport("not configured".into()))),
            issue: RwLock::new(Err(PortalError::Transport("not configured".into()))),
            challenge_calls: RwLock::new(Vec::new()),
            issue_calls: RwLock::new(Vec::new()),
        }
    }

    pub async fn set_challenge(&self, response: PortalResult<Outcome<ChallengeOrder>>) {
        *self.challenge.write().await = response;
    }

    pub async fn set_issue(&self, response: PortalResult<Outcome<IssuedCertificate>>) {
        *self.issue.write().await = response;
    }

    pub async fn challenge_calls(&self) -> Vec<Vec<String>> {
        self.challenge_calls.read().await.clone()
    }

    pub async fn issue_calls(&self) -> Vec<String> {
        self.issue_calls.read().await.clone()
    }
}

#[async_trait]
impl CertificateApi for MockCertificateApi {
    async fn request_challenge(
        &self,
        domains: &DomainList,
    ) -> PortalResult<Outcome<ChallengeOrder>> {
        self.challenge_calls
            .write()
            .await
            .push(domains.as_slice().to_vec());
        self.challenge.read().await.clone()
    }

    async fn issue_certificate(&self, id: &OrderId) -> PortalResult<Outcome<IssuedCertificate>> {
        self.issue_calls.write().await.push(id.as_str().to_string());
        self.issue.read().await.clone()
    }
}

// ===== 工厂方法 =====

pub fn create_test_service() -> (PortalService<MockCertificateApi>, Arc<MockCertificateApi>) {
    let api = Arc::new(MockCertificateApi::new());
    (PortalService::new(Arc::clone(&api)), api)
}

pub fn sample_order() -> ChallengeOrder {
    ChallengeOrder {
        id: "abc123".to_string(),
        dns: vec![DnsChallengeRecord {
            record_type: "TXT".to_string(),
            record: "_acme".to_string(),
            value: "xyz".to_string(),
        }],
    }
}

pub fn sample_certificate() -> IssuedCertificate {
    IssuedCertificate {
        message: "Certificate issued".to_string(),
        domains: vec!["example.com".to_string()],
        certificate: include_str!("../tests/fixtures/leaf.pem").to_string(),
        private_key: include_str!("../tests/fixtures/leaf.key").to_string(),
    }
}
