//! run_server 启动失败路径

use std::net::TcpListener;

use care_bootstrap::run_server;
use care_errors::AppError;
use figment::Jail;
use tonic::transport::server::Router;

fn free_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .map(|addr| addr.port())
        .unwrap()
}

#[test]
fn test_failed_service_registration_leaves_no_health_server() {
    let health_port = free_port();

    Jail::expect_with(|jail| {
        jail.set_env("BILLING_SERVER__HOST", "127.0.0.1");
        jail.set_env("BILLING_SERVER__PORT", free_port());
        jail.set_env("BILLING_HEALTH__PORT", health_port);

        let runtime = tokio::runtime::Runtime::new().map_err(|e| e.to_string())?;
        let result = runtime.block_on(run_server(".", |_config, _server| async {
            Err::<Router, _>(AppError::internal("registration failed"))
        }));
        drop(runtime);

        assert!(matches!(result, Err(AppError::Internal(ref m)) if m == "registration failed"));

        let rebind = TcpListener::bind(("0.0.0.0", health_port));
        assert!(rebind.is_ok(), "health port still bound: {:?}", rebind.err());
        Ok(())
    });
}
