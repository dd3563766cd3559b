//! Client-side core for the ACME portal
//!
//! 提供挑战/签发两个表单流程背后的全部逻辑：域名校验、订单 ID 解析、
//! 后端 HTTP 客户端、流程状态（忙碌标志 + 请求票据）、证书链拆分与导出。
//! UI 层只负责把这些结果画出来。

mod error;
mod services;
mod types;
mod utils;

#[cfg(test)]
mod test_utils;

pub use error::{PortalError, PortalResult};
pub use services::{
    export_certificate, inspect_certificate, split_certificate_chain, start_challenge,
    start_issue, validate_domains, CertificateApi, ExportedFiles, Flow, HttpCertificateApi,
    PortalService, Ticket,
};
pub use types::{
    ApiFailure, CertificateChain, CertificateSummary, ChallengeOrder, DnsChallengeRecord,
    DomainList, IssuedCertificate, OrderId, Outcome,
};
pub use utils::truncate_for_log;
