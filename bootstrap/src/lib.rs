//! care-bootstrap - 统一服务启动骨架
//!
//! 配置加载、日志、健康检查、metrics、反射与 graceful shutdown

pub mod health;
pub mod metrics;
mod reflection;
mod runtime;
mod shutdown;
mod starter;

pub use health::{ComponentHealth, HealthChecker, HealthServer, HealthStatus};
pub use metrics::{MetricsRecorder, RequestTimer};
pub use reflection::*;
pub use runtime::*;
pub use shutdown::*;
pub use starter::*;
