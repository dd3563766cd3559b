//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::time::Duration;

use acme_portal_core::HttpCertificateApi;

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 叶子证书 + 中间证书
pub fn chain_pem() -> String {
    format!(
        "{}{}",
        include_str!("../fixtures/leaf.pem"),
        include_str!("../fixtures/intermediate.pem")
    )
}

/// 指向 mock 服务器的客户端
pub fn api_for(base_url: &str) -> Option<HttpCertificateApi> {
    HttpCertificateApi::new(base_url, Duration::from_secs(5)).ok()
}
