//! 签发页面状态

use acme_portal_core::{
    inspect_certificate, split_certificate_chain, start_issue, CertificateChain,
    CertificateSummary, Flow, IssuedCertificate, OrderId, Outcome, Ticket,
};

use super::InputField;

/// 拆分后的证书链及每一块的解析结果
#[derive(Debug, Clone)]
pub struct RenderedCertificate {
    pub chain: CertificateChain,
    /// 与 `chain.blocks` 一一对应，解析失败为 `None`
    pub summaries: Vec<Option<CertificateSummary>>,
}

impl RenderedCertificate {
    pub fn new(pem: &str) -> Self {
        let chain = split_certificate_chain(pem);
        let summaries = chain
            .blocks
            .iter()
            .map(|block| inspect_certificate(block))
            .collect();
        Self { chain, summaries }
    }

    /// 叶子证书的解析结果
    pub fn leaf_summary(&self) -> Option<&CertificateSummary> {
        self.summaries.first().and_then(Option::as_ref)
    }
}

/// 签发页面状态
#[derive(Debug, Default)]
pub struct IssueState {
    /// 订单 ID 输入
    pub input: InputField,
    /// 请求状态与最近一次结果
    pub flow: Flow<IssuedCertificate>,
    /// 结果区滚动偏移（行）
    pub scroll: u16,
    /// 在途请求对应的订单 ID
    pending_id: Option<OrderId>,
    /// 当前结果对应的订单 ID
    pub order_id: Option<OrderId>,
    /// 成功结果的证书链
    pub rendered: Option<RenderedCertificate>,
    /// 是否显示私钥明文
    pub show_private_key: bool,
    /// 是否正在导出
    pub exporting: bool,
}

impl IssueState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 用输入框的内容开始一次签发请求
    ///
    /// ID 无效时结果区直接显示错误并返回 `None`。
    pub fn start(&mut self) -> Option<(Ticket, OrderId)> {
        let started = start_issue(&mut self.flow, self.input.as_str());
        match &started {
            Some((_, id)) => self.pending_id = Some(id.clone()),
            None => {
                self.pending_id = None;
                self.reset_result_view();
            }
        }
        started
    }

    /// 写入请求结果，票据过期返回 `false`
    pub fn settle(&mut self, ticket: Ticket, outcome: Outcome<IssuedCertificate>) -> bool {
        if !self.flow.settle(ticket, outcome) {
            return false;
        }
        self.reset_result_view();
        self.order_id = self.pending_id.take();
        self.rendered = self.certificate().map(|c| RenderedCertificate::new(&c.certificate));
        true
    }

    /// 成功签发的证书
    pub fn certificate(&self) -> Option<&IssuedCertificate> {
        self.flow.result().and_then(Outcome::success)
    }

    fn reset_result_view(&mut self) {
        self.scroll = 0;
        self.show_private_key = false;
        self.order_id = None;
        self.rendered = None;
    }
}
