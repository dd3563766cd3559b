//! 业务逻辑服务层

mod certificate;
mod client;
mod export;
mod flow;
mod service;
mod validation;

pub use certificate::{inspect_certificate, split_certificate_chain};
pub use client::{CertificateApi, HttpCertificateApi};
pub use export::{export_certificate, ExportedFiles};
pub use flow::{Flow, Ticket};
pub use service::{start_challenge, start_issue, PortalService};
pub use validation::validate_domains;
