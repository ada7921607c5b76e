//! gRPC API 实现

mod billing_service_impl;

pub use billing_service_impl::*;

use std::sync::Arc;

use crate::application::{RequestLog, ServiceHandler};

/// 创建账单服务，注册到 tonic `Server` 上即可对外提供
pub fn create_billing_service(
    request_log: Arc<dyn RequestLog>,
) -> BillingServiceServer<BillingServiceImpl> {
    let handler = Arc::new(ServiceHandler::new(request_log));
    BillingServiceServer::new(BillingServiceImpl::new(handler))
}
