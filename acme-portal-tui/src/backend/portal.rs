//! 后台任务执行器
//!
//! 把 Update 层产出的 [`BackendCommand`] 放到 tokio 运行时上执行，
//! 完成后通过通道把 [`BackendMessage`] 发回主循环。

use std::sync::Arc;

use acme_portal_core::{
    export_certificate, CertificateApi, HttpCertificateApi, Outcome, PortalError, PortalService,
};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use super::config_service::{AppConfig, ConfigService};
use crate::message::{BackendCommand, BackendMessage};

/// 根据配置创建门户服务
///
/// 未配置或无法解析的 API 地址返回 [`PortalError::Config`]。
pub fn connect(config: &AppConfig) -> Result<PortalService<dyn CertificateApi>, PortalError> {
    let url = config
        .api_url()
        .ok_or_else(|| PortalError::Config("API URL is not configured".to_string()))?;
    let api: Arc<dyn CertificateApi> = Arc::new(HttpCertificateApi::new(url, config.timeout())?);
    Ok(PortalService::new(api))
}

/// 后台任务执行器
pub struct PortalBackend {
    runtime: Handle,
    tx: UnboundedSender<BackendMessage>,
    /// API 地址有误时为 `Err`，每次提交都直接失败
    service: Result<PortalService<dyn CertificateApi>, PortalError>,
    config_service: Arc<dyn ConfigService>,
}

impl PortalBackend {
    pub fn new(
        runtime: Handle,
        tx: UnboundedSender<BackendMessage>,
        config: &AppConfig,
        config_service: Arc<dyn ConfigService>,
    ) -> Self {
        let service = connect(config);
        match &service {
            Ok(_) => log::info!("[Backend] API base URL: {}", config.api_url().unwrap_or("")),
            Err(e) => log::warn!("[Backend] {e}"),
        }
        Self {
            runtime,
            tx,
            service,
            config_service,
        }
    }

    /// 执行一条命令，不阻塞主循环
    pub fn dispatch(&self, command: BackendCommand) {
        match command {
            BackendCommand::RequestChallenge { ticket, domains } => match &self.service {
                Ok(service) => {
                    let service = service.clone();
                    self.spawn(async move {
                        let outcome = service.challenge(&domains).await;
                        BackendMessage::ChallengeCompleted { ticket, outcome }
                    });
                }
                Err(e) => self.send(BackendMessage::ChallengeCompleted {
                    ticket,
                    outcome: Outcome::from(e.clone()),
                }),
            },

            BackendCommand::IssueCertificate { ticket, id } => match &self.service {
                Ok(service) => {
                    let service = service.clone();
                    self.spawn(async move {
                        let outcome = service.issue(&id).await;
                        BackendMessage::IssueCompleted { ticket, outcome }
                    });
                }
                Err(e) => self.send(BackendMessage::IssueCompleted {
                    ticket,
                    outcome: Outcome::from(e.clone()),
                }),
            },

            BackendCommand::ExportCertificate { dir, certificate } => {
                self.spawn(async move {
                    let result = export_certificate(&dir, &certificate)
                        .await
                        .map_err(|e| {
                            log::error!("[Backend] export failed: {e}");
                            e.to_string()
                        });
                    BackendMessage::ExportCompleted(result)
                });
            }

            BackendCommand::SaveSettings { theme, language } => {
                let config_service = Arc::clone(&self.config_service);
                let task = move || {
                    // 从文件重新读取，避免把环境变量覆盖的值写回去
                    let mut config = config_service.load()?;
                    config.theme = theme.code().to_string();
                    config.language = language.code().to_string();
                    config_service.save(&config)
                };
                let tx = self.tx.clone();
                self.runtime.spawn_blocking(move || {
                    let result = task().map_err(|e| {
                        log::error!("[Backend] saving settings failed: {e:#}");
                        format!("{e:#}")
                    });
                    let _ = tx.send(BackendMessage::ConfigSaved(result));
                });
            }
        }
    }

    fn spawn<F>(&self, task: F)
    where
        F: std::future::Future<Output = BackendMessage> + Send + 'static,
    {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let message = task.await;
            // 主循环已退出时接收端关闭，结果无人关心
            let _ = tx.send(message);
        });
    }

    fn send(&self, message: BackendMessage) {
        let _ = self.tx.send(message);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use std::time::Duration;

    use acme_portal_core::{validate_domains, Flow, IssuedCertificate, OrderId};
    use tokio::sync::mpsc;

    use super::*;
    use crate::backend::JsonConfigService;
    use crate::i18n::Language;
    use crate::model::Theme;

    fn backend_with(
        config: &AppConfig,
        config_path: &std::path::Path,
    ) -> (
        tokio::runtime::Runtime,
        PortalBackend,
        mpsc::UnboundedReceiver<BackendMessage>,
    ) {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();
        let (tx, rx) = mpsc::unbounded_channel();
        let backend = PortalBackend::new(
            runtime.handle().clone(),
            tx,
            config,
            Arc::new(JsonConfigService::with_path(config_path)),
        );
        (runtime, backend, rx)
    }

    fn recv(
        runtime: &tokio::runtime::Runtime,
        rx: &mut mpsc::UnboundedReceiver<BackendMessage>,
    ) -> BackendMessage {
        runtime
            .block_on(async { tokio::time::timeout(Duration::from_secs(10), rx.recv()).await })
            .unwrap()
            .unwrap()
    }

    #[test]
    fn connect_requires_api_url() {
        let err = connect(&AppConfig::default()).err().unwrap();
        assert_eq!(err.to_string(), "API URL is not configured");

        let config = AppConfig {
            api_url: Some("http://localhost:8080".into()),
            ..AppConfig::default()
        };
        assert!(connect(&config).is_ok());
    }

    #[test]
    fn missing_api_url_fails_both_flows_with_their_ticket() {
        let tmp = tempfile::tempdir().unwrap();
        let (runtime, backend, mut rx) =
            backend_with(&AppConfig::default(), &tmp.path().join("config.json"));

        let mut challenge = Flow::<acme_portal_core::ChallengeOrder>::new();
        let ticket = challenge.begin();
        backend.dispatch(BackendCommand::RequestChallenge {
            ticket,
            domains: validate_domains("example.com").unwrap(),
        });
        match recv(&runtime, &mut rx) {
            BackendMessage::ChallengeCompleted { ticket: t, outcome } => {
                assert_eq!(t, ticket);
                assert_eq!(outcome.failure_message(), Some("API URL is not configured"));
            }
            other => panic!("unexpected message: {other:?}"),
        }

        let mut issue = Flow::<IssuedCertificate>::new();
        let ticket = issue.begin();
        backend.dispatch(BackendCommand::IssueCertificate {
            ticket,
            id: "abc123".parse::<OrderId>().unwrap(),
        });
        assert!(matches!(
            recv(&runtime, &mut rx),
            BackendMessage::IssueCompleted { outcome: Outcome::Failure { .. }, .. }
        ));
    }

    #[test]
    fn unreachable_backend_reports_transport_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let config = AppConfig {
            api_url: Some("http://127.0.0.1:1".into()),
            request_timeout_secs: 5,
            ..AppConfig::default()
        };
        let (runtime, backend, mut rx) = backend_with(&config, &tmp.path().join("config.json"));

        let ticket = Flow::<acme_portal_core::ChallengeOrder>::new().begin();
        backend.dispatch(BackendCommand::RequestChallenge {
            ticket,
            domains: validate_domains("example.com").unwrap(),
        });
        match recv(&runtime, &mut rx) {
            BackendMessage::ChallengeCompleted { outcome, .. } => {
                assert!(outcome.failure_message().is_some_and(|m| !m.is_empty()));
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn save_settings_keeps_file_values() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        let on_disk = AppConfig {
            api_url: Some("http://from-file".into()),
            ..AppConfig::default()
        };
        JsonConfigService::with_path(&path).save(&on_disk).unwrap();

        // 运行时的配置被环境变量覆盖过
        let runtime_config = AppConfig {
            api_url: Some("http://from-env".into()),
            ..on_disk.clone()
        };
        let (runtime, backend, mut rx) = backend_with(&runtime_config, &path);

        backend.dispatch(BackendCommand::SaveSettings {
            theme: Theme::Light,
            language: Language::ZhCn,
        });
        assert!(matches!(
            recv(&runtime, &mut rx),
            BackendMessage::ConfigSaved(Ok(()))
        ));

        let saved = JsonConfigService::with_path(&path).load().unwrap();
        assert_eq!(saved.api_url(), Some("http://from-file"));
        assert_eq!(saved.theme(), Theme::Light);
        assert_eq!(saved.language(), Language::ZhCn);
    }

    #[test]
    fn export_writes_into_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let (runtime, backend, mut rx) =
            backend_with(&AppConfig::default(), &tmp.path().join("config.json"));
        let dir = tmp.path().join("certs").join("abc123");

        backend.dispatch(BackendCommand::ExportCertificate {
            dir: dir.clone(),
            certificate: IssuedCertificate {
                message: String::new(),
                domains: vec!["example.com".into()],
                certificate: "-----BEGIN CERTIFICATE-----\nAAAA\n-----END CERTIFICATE-----\n"
                    .into(),
                private_key: String::new(),
            },
        });
        match recv(&runtime, &mut rx) {
            BackendMessage::ExportCompleted(Ok(files)) => {
                assert_eq!(files.dir, dir);
                assert!(dir.join("cert.pem").exists());
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }
}
