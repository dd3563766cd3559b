//! 表单流程状态
//!
//! 挑战与签发各持有一个 [`Flow`]：自己的忙碌标志、最近一次发出的票据、
//! 以及最近一次提交的结果。完成消息必须带着发起时拿到的票据回来，
//! 票据过期的完成消息被直接丢弃。

use crate::error::{PortalError, PortalResult};
use crate::types::Outcome;

/// 一次提交的序号，单个 [`Flow`] 内单调递增
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ticket(u64);

impl Ticket {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// 单个流程的 UI 状态
#[derive(Debug, Clone)]
pub struct Flow<T> {
    busy: bool,
    latest: Ticket,
    result: Option<Outcome<T>>,
}

impl<T> Default for Flow<T> {
    fn default() -> Self {
        Self {
            busy: false,
            latest: Ticket::default(),
            result: None,
        }
    }
}

impl<T> Flow<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否有请求在途
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// 最近一次提交的结果
    #[must_use]
    pub fn result(&self) -> Option<&Outcome<T>> {
        self.result.as_ref()
    }

    /// 最近发出的票据
    #[must_use]
    pub fn latest_ticket(&self) -> Ticket {
        self.latest
    }

    /// 开始一次请求：进入忙碌并返回新票据
    pub fn begin(&mut self) -> Ticket {
        self.latest = self.latest.next();
        self.busy = true;
        self.latest
    }

    /// 根据本地校验结果开始一次提交
    ///
    /// 校验失败时 [`reject`](Self::reject) 并返回 `None`；
    /// 通过时 [`begin`](Self::begin)，返回票据和解析后的输入。
    pub fn start<I>(&mut self, input: PortalResult<I>) -> Option<(Ticket, I)> {
        match input {
            Ok(input) => Some((self.begin(), input)),
            Err(e) => {
                self.reject(&e);
                None
            }
        }
    }

    /// 本地校验失败：直接写入结果，不进入忙碌
    ///
    /// 同时作废仍在途的请求，结果始终对应最近一次提交。
    pub fn reject(&mut self, error: &PortalError) {
        self.latest = self.latest.next();
        self.busy = false;
        self.result = Some(Outcome::failure(error.to_string()));
    }

    /// 写入请求结果
    ///
    /// 票据不是最新的返回 `false`，状态保持不变。
    pub fn settle(&mut self, ticket: Ticket, outcome: Outcome<T>) -> bool {
        if ticket != self.latest {
            log::debug!(
                "[Flow] discarding stale completion #{} (latest #{})",
                ticket.0,
                self.latest.0
            );
            return false;
        }
        self.busy = false;
        self.result = Some(outcome);
        true
    }

    /// 清空结果（不影响在途请求）
    pub fn clear(&mut self) {
        self.result = None;
    }
}
