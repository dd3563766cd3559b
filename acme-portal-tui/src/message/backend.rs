//! 后台任务的命令与完成消息
//!
//! Update 层产出 [`BackendCommand`]，主循环交给 Backend 层执行；
//! 执行结果以 [`BackendMessage`] 的形式回到 Update 层。

use std::path::PathBuf;

use acme_portal_core::{
    ChallengeOrder, DomainList, ExportedFiles, IssuedCertificate, OrderId, Outcome, Ticket,
};

use crate::i18n::Language;
use crate::model::Theme;

/// 需要 Backend 层执行的副作用
#[derive(Debug, Clone)]
pub enum BackendCommand {
    /// `POST /challenge`
    RequestChallenge { ticket: Ticket, domains: DomainList },
    /// `POST /issue/{id}`
    IssueCertificate { ticket: Ticket, id: OrderId },
    /// 把证书写入目录
    ExportCertificate {
        dir: PathBuf,
        certificate: IssuedCertificate,
    },
    /// 把界面偏好写回配置文件
    SaveSettings { theme: Theme, language: Language },
}

/// 后台任务完成消息
#[derive(Debug, Clone)]
pub enum BackendMessage {
    /// 挑战请求完成
    ChallengeCompleted {
        ticket: Ticket,
        outcome: Outcome<ChallengeOrder>,
    },
    /// 签发请求完成
    IssueCompleted {
        ticket: Ticket,
        outcome: Outcome<IssuedCertificate>,
    },
    /// 导出完成（失败时携带错误信息）
    ExportCompleted(Result<ExportedFiles, String>),
    /// 配置保存完成（失败时携带错误信息）
    ConfigSaved(Result<(), String>),
}
