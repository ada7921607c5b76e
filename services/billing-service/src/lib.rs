//! billing-service - 患者账单账户 gRPC 服务

pub mod api;
pub mod application;
pub mod domain;

// 引入生成的 proto 代码
pub mod proto {
    pub mod billing {
        pub mod v1 {
            tonic::include_proto!("care.billing.v1");
        }
    }
}

pub use proto::billing::v1 as pb;

/// File descriptor set for gRPC reflection
pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("billing_descriptor");
