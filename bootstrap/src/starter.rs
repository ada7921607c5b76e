//! 服务启动器
//!
//! 提供统一的服务启动模式

use std::future::Future;
use std::sync::Arc;

use care_config::AppConfig;
use care_errors::AppResult;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tonic::transport::server::Router;
use tracing::{error, info};

use crate::health::{HealthChecker, HealthServer};
use crate::metrics::MetricsRecorder;
use crate::runtime::{init_runtime, shutdown_signal};
use crate::shutdown::ShutdownController;

/// 在已绑定的监听器上运行 gRPC 路由，直到 `signal` 完成
pub async fn serve<F>(listener: TcpListener, router: Router, signal: F) -> AppResult<()>
where
    F: Future<Output = ()>,
{
    let incoming = TcpListenerStream::new(listener);
    router.serve_with_incoming_shutdown(incoming, signal).await?;
    Ok(())
}

/// 运行 gRPC 服务
///
/// 所有微服务的统一入口点：
/// 1. 加载配置
/// 2. 初始化运行时（日志）
/// 3. 安装 Prometheus recorder
/// 4. 启动健康检查 HTTP 服务器
/// 5. 调用用户提供的闭包显式注册 gRPC 服务
/// 6. 启动服务器并处理 graceful shutdown
///
/// # 示例
///
/// ```ignore
/// use care_bootstrap::run_server;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run_server("config", |_config, mut server| async move {
///         Ok(server.add_service(MyServiceServer::new(MyServiceImpl::new())))
///     })
///     .await?;
///     Ok(())
/// }
/// ```
pub async fn run_server<F, Fut>(config_dir: &str, server_builder: F) -> AppResult<()>
where
    F: FnOnce(AppConfig, Server) -> Fut,
    Fut: Future<Output = AppResult<Router>>,
{
    let config = AppConfig::load(config_dir)?;

    init_runtime(&config);

    info!("Starting {} service", config.app_name);

    let metrics = MetricsRecorder::install()?;

    // 地址、服务注册、端口绑定都成功后才启动健康检查服务器
    let addr = config.grpc_addr()?;
    let health_port = config.health.enabled.then(|| config.health_port());

    let router = server_builder(config, Server::builder()).await?;

    let listener = TcpListener::bind(addr).await?;

    let health_checker = Arc::new(HealthChecker::new());
    let shutdown = ShutdownController::new();

    let health_handle = health_port.map(|port| {
        let health_server = HealthServer::new(health_checker.clone(), Some(metrics), port);
        let signal = shutdown.shutdown_signal();
        tokio::spawn(async move {
            if let Err(e) = health_server.serve(signal).await {
                error!("Health server error: {}", e);
            }
        })
    });

    let os_signal = {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            shutdown_signal().await;
            shutdown.shutdown();
        })
    };

    info!(%addr, "gRPC server starting");

    health_checker.mark_serving();
    let result = serve(listener, router, shutdown.shutdown_signal()).await;
    health_checker.mark_not_serving();

    // serve 失败时同样要停止健康检查服务器
    shutdown.shutdown();
    os_signal.abort();
    if let Some(handle) = health_handle {
        let _ = handle.await;
    }

    info!("Service stopped");

    result
}
