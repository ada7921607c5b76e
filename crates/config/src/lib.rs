//! care-config - 配置加载库
//!
//! 分层加载：`default.toml` → `{APP_ENV}.toml` → `BILLING_` 前缀环境变量

use std::net::{AddrParseError, SocketAddr};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use care_errors::AppError;
use serde::Deserialize;
use thiserror::Error;

/// 环境变量前缀，嵌套字段用 `__` 分隔，例如 `BILLING_SERVER__PORT`
pub const ENV_PREFIX: &str = "BILLING_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),

    #[error("Invalid listen address: {0}")]
    Address(#[from] AddrParseError),
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::config(err.to_string())
    }
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 是否注册 gRPC 反射服务
    pub reflection: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 9001,
            reflection: true,
        }
    }
}

/// 遥测配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    pub log_level: String,
    /// 强制开启/关闭 JSON 日志；未设置时生产环境使用 JSON
    pub json: Option<bool>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: None,
        }
    }
}

/// 健康检查配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    pub enabled: bool,
    /// 健康检查端口（默认为 gRPC 端口 + 1000）
    pub port: Option<u16>,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            port: None,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app_name: String,
    pub app_env: String,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub health: HealthConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "billing-service".to_string(),
            app_env: "development".to_string(),
            server: ServerConfig::default(),
            telemetry: TelemetryConfig::default(),
            health: HealthConfig::default(),
        }
    }
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 设置了 `APP_ENV` 时，它同时决定 profile 文件和 `app_env` 字段
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let profile = std::env::var("APP_ENV").ok();
        let env = profile.as_deref().unwrap_or("development");

        let mut figment = Figment::new()
            .merge(Toml::file(format!("{}/default.toml", config_dir)))
            .merge(Toml::file(format!("{}/{}.toml", config_dir, env)));
        if let Some(profile) = profile.as_deref() {
            figment = figment.merge(Serialized::default("app_env", profile));
        }

        let config: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        Ok(config)
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }

    /// 是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app_env == "development"
    }

    /// 是否输出 JSON 格式日志
    pub fn json_logs(&self) -> bool {
        self.telemetry.json.unwrap_or_else(|| self.is_production())
    }

    /// gRPC 监听地址
    pub fn grpc_addr(&self) -> Result<SocketAddr, ConfigError> {
        Ok(format!("{}:{}", self.server.host, self.server.port).parse()?)
    }

    /// 健康检查端口
    pub fn health_port(&self) -> u16 {
        self.health
            .port
            .unwrap_or_else(|| self.server.port.saturating_add(1000))
    }
}
