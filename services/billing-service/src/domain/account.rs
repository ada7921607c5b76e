use std::fmt;

/// 占位账户 ID，尚无账户分配逻辑
pub const PLACEHOLDER_ACCOUNT_ID: &str = "12345";

/// 账单账户状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    Active,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 账单账户
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingAccount {
    pub account_id: String,
    pub status: AccountStatus,
}

impl BillingAccount {
    /// 与请求无关的固定账户
    pub fn placeholder() -> Self {
        Self {
            account_id: PLACEHOLDER_ACCOUNT_ID.to_string(),
            status: AccountStatus::Active,
        }
    }
}
