//! 页面路由

/// 右侧内容区当前显示的页面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 申请 DNS 挑战
    #[default]
    Challenge,
    /// 凭订单 ID 签发证书
    Issue,
    /// 设置
    Settings,
}
