//!
//! src/backend/mod.rs
//! Backend 层：副作用执行
//!
//! Backend 层与 UI 完全解耦，负责所有需要 I/O 的工作。
//! 网络请求和证书导出由 acme-portal-core 实现，这里只负责调度。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件读写 + 环境变量覆盖
//!         mod portal;             // 后台任务执行器
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、配置服务（JsonConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/config_service.rs 中定义：
//!
//!         存储位置：~/.config/acme-portal/config.json
//!
//!         启动时 load() 一次，再叠加环境变量（with_env_overrides）。
//!         设置页只会写回 theme / language，写之前重新读取文件，
//!         所以环境变量覆盖的值不会落盘。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、后台任务执行器（PortalBackend）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/portal.rs 中定义：
//!
//!         持有 tokio 运行时句柄和一个 UnboundedSender<BackendMessage>。
//!
//!         dispatch(BackendCommand)：
//!             - RequestChallenge / IssueCertificate   spawn 网络请求
//!             - ExportCertificate                     spawn 文件写入
//!             - SaveSettings                          spawn_blocking 写配置
//!
//!         API 地址缺失或无效时不会发出请求，
//!         直接以失败结果回复（带着原来的票据）。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Update 层返回 BackendCommand
//!         ↓
//!     app.rs 调用 PortalBackend::dispatch()
//!         ↓
//!     tokio 任务执行 acme-portal-core 的服务
//!         ↓
//!     BackendMessage 通过通道回到主循环
//!         ↓
//!     Update 层更新 Model 状态
//!         ↓
//!     View 层重新渲染
//!

mod config_service;
mod portal;

pub use config_service::{AppConfig, ConfigService, JsonConfigService};
pub use portal::PortalBackend;
