//! BillingService gRPC 实现

use std::sync::Arc;

use care_bootstrap::RequestTimer;
use tonic::server::NamedService;
use tonic::{Request, Response, Status};

pub use crate::pb::billing_service_server::{BillingService, BillingServiceServer};
use crate::pb::{BillingRequest, BillingResponse};

use crate::application::ServiceHandler;
use crate::application::commands::CreateBillingAccountCommand;
use crate::domain::BillingAccount;

const SERVICE_NAME: &str = <BillingServiceServer<BillingServiceImpl> as NamedService>::NAME;

/// BillingService 实现
pub struct BillingServiceImpl {
    handler: Arc<ServiceHandler>,
}

impl BillingServiceImpl {
    pub fn new(handler: Arc<ServiceHandler>) -> Self {
        Self { handler }
    }
}

#[tonic::async_trait]
impl BillingService for BillingServiceImpl {
    async fn create_billing_account(
        &self,
        request: Request<BillingRequest>,
    ) -> Result<Response<BillingResponse>, Status> {
        let timer = RequestTimer::new(SERVICE_NAME, "CreateBillingAccount");
        let req = request.into_inner();

        let account = self
            .handler
            .create_billing_account(CreateBillingAccountCommand {
                patient_id: req.patient_id,
            });

        timer.finish(tonic::Code::Ok);
        Ok(Response::new(account.into()))
    }
}

impl From<BillingAccount> for BillingResponse {
    fn from(account: BillingAccount) -> Self {
        Self {
            account_id: account.account_id,
            status: account.status.as_str().to_string(),
        }
    }
}
