//! Business logic handler

use std::sync::Arc;

use crate::application::RequestLog;
use crate::application::commands::CreateBillingAccountCommand;
use crate::domain::BillingAccount;

pub struct ServiceHandler {
    request_log: Arc<dyn RequestLog>,
}

impl ServiceHandler {
    pub fn new(request_log: Arc<dyn RequestLog>) -> Self {
        Self { request_log }
    }

    /// 创建账单账户
    ///
    /// 不校验 `patient_id`，也不落库；结果与输入无关
    pub fn create_billing_account(&self, cmd: CreateBillingAccountCommand) -> BillingAccount {
        self.request_log.billing_account_requested(&cmd.patient_id);
        BillingAccount::placeholder()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::MockRequestLog;
    use crate::domain::AccountStatus;

    fn command(patient_id: &str) -> CreateBillingAccountCommand {
        CreateBillingAccountCommand {
            patient_id: patient_id.to_string(),
        }
    }

    #[test]
    fn test_logs_patient_id_once() {
        let mut log = MockRequestLog::new();
        log.expect_billing_account_requested()
            .withf(|patient_id: &str| patient_id == "p-001")
            .times(1)
            .return_const(());

        let handler = ServiceHandler::new(Arc::new(log));
        let account = handler.create_billing_account(command("p-001"));

        assert_eq!(account.account_id, "12345");
        assert_eq!(account.status, AccountStatus::Active);
    }

    #[test]
    fn test_empty_patient_id_is_accepted() {
        let mut log = MockRequestLog::new();
        log.expect_billing_account_requested()
            .withf(|patient_id: &str| patient_id.is_empty())
            .times(1)
            .return_const(());

        let handler = ServiceHandler::new(Arc::new(log));
        assert_eq!(
            handler.create_billing_account(command("")),
            BillingAccount::placeholder()
        );
    }

    #[test]
    fn test_result_is_input_independent() {
        let mut log = MockRequestLog::new();
        log.expect_billing_account_requested()
            .times(3)
            .return_const(());

        let handler = ServiceHandler::new(Arc::new(log));
        let a = handler.create_billing_account(command("p-001"));
        let b = handler.create_billing_account(command("not a real id \u{0}"));
        let c = handler.create_billing_account(command(&"x".repeat(4096)));

        assert_eq!(a, b);
        assert_eq!(b, c);
    }
}
