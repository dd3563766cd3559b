//! 配置服务
//!
//! 配置文件：`<config_dir>/acme-portal/config.json`
//!
//! 环境变量优先于文件：
//! - `ACME_PORTAL_API_URL`（兼容 `NEXT_PUBLIC_API_URL`）
//! - `ACME_PORTAL_TIMEOUT_SECS`
//! - `ACME_PORTAL_OUTPUT_DIR`

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::model::Theme;

const APP_DIR: &str = "acme-portal";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// 获取配置目录路径
fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// 默认导出目录
fn default_output_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("certs")
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 后端 API 根地址，没有默认值
    pub api_url: Option<String>,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 证书导出目录，`None` 时使用数据目录下的 `certs/`
    pub output_dir: Option<PathBuf>,
    /// `dark` / `light`
    pub theme: String,
    /// BCP 47 语言代码
    pub language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            output_dir: None,
            theme: Theme::default().code().to_string(),
            language: Language::default().code().to_string(),
        }
    }
}

impl AppConfig {
    /// 去掉首尾空白后非空的 API 地址
    pub fn api_url(&self) -> Option<&str> {
        self.api_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(default_output_dir)
    }

    /// 未知取值回退到默认主题
    pub fn theme(&self) -> Theme {
        Theme::from_code(&self.theme).unwrap_or_default()
    }

    /// 未知取值回退到默认语言
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_default()
    }

    /// 用环境变量覆盖文件中的值
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// `lookup` 返回某个键的覆盖值
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("ACME_PORTAL_API_URL").or_else(|| lookup("NEXT_PUBLIC_API_URL"))
        {
            self.api_url = Some(url);
        }
        if let Some(raw) = lookup("ACME_PORTAL_TIMEOUT_SECS") {
            match raw.trim().parse() {
                Ok(secs) => self.request_timeout_secs = secs,
                Err(e) => log::warn!("Ignoring ACME_PORTAL_TIMEOUT_SECS={raw}: {e}"),
            }
        }
        if let Some(dir) = lookup("ACME_PORTAL_OUTPUT_DIR") {
            self.output_dir = Some(PathBuf::from(dir));
        }
        self
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 基于 JSON 文件的配置服务
pub struct JsonConfigService {
    path: PathBuf,
}

impl JsonConfigService {
    /// 使用默认配置文件路径
    pub fn new() -> Self {
        Self::with_path(get_config_dir().join("config.json"))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for JsonConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", self.path.display()))
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }

        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}
