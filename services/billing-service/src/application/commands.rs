/// 创建账单账户命令
#[derive(Debug, Clone)]
pub struct CreateBillingAccountCommand {
    pub patient_id: String,
}
