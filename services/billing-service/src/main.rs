//! Billing Service

use std::sync::Arc;

use billing_service::FILE_DESCRIPTOR_SET;
use billing_service::api::grpc::create_billing_service;
use billing_service::application::TracingRequestLog;
use care_bootstrap::{build_reflection, run_server};
use care_config::AppConfig;
use care_errors::AppError;
use tonic::transport::Server;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    run_server("config", |config: AppConfig, mut server: Server| async move {
        info!("Initializing billing-service...");

        let router = server.add_service(create_billing_service(Arc::new(TracingRequestLog)));

        let router = if config.server.reflection {
            info!("gRPC reflection enabled");
            router.add_service(build_reflection(&[FILE_DESCRIPTOR_SET])?)
        } else {
            router
        };

        Ok::<_, AppError>(router)
    })
    .await?;

    Ok(())
}
