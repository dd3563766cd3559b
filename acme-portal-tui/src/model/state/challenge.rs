//! 挑战页面状态

use acme_portal_core::{ChallengeOrder, Flow};

use super::InputField;

/// 挑战页面状态
#[derive(Debug, Default)]
pub struct ChallengeState {
    /// 逗号分隔的域名输入
    pub input: InputField,
    /// 请求状态与最近一次结果
    pub flow: Flow<ChallengeOrder>,
    /// 结果区滚动偏移（行）
    pub scroll: u16,
}

impl ChallengeState {
    pub fn new() -> Self {
        Self::default()
    }
}
