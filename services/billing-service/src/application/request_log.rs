//! 请求日志能力
//!
//! 由调用方注入 handler，handler 不直接依赖全局日志

use tracing::info;

/// 请求日志
#[cfg_attr(test, mockall::automock)]
pub trait RequestLog: Send + Sync {
    /// 收到为某患者创建账单账户的请求
    fn billing_account_requested(&self, patient_id: &str);
}

/// 基于 tracing 的实现
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRequestLog;

impl RequestLog for TracingRequestLog {
    fn billing_account_requested(&self, patient_id: &str) {
        info!(patient_id = %patient_id, "CreateBillingAccount request received");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// 收集 fmt 层输出
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(patient_id: &str) -> Vec<String> {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            TracingRequestLog.billing_account_requested(patient_id);
        });

        let bytes = logs.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_emits_one_info_line_with_patient_id() {
        let lines = capture("p-001");
        assert_eq!(lines.len(), 1, "{:?}", lines);
        assert!(lines[0].contains("INFO"), "{}", lines[0]);
        assert!(lines[0].contains("CreateBillingAccount request received"), "{}", lines[0]);
        assert!(lines[0].contains("patient_id=p-001"), "{}", lines[0]);
    }

    #[test]
    fn test_empty_patient_id_is_still_logged() {
        let lines = capture("");
        assert_eq!(lines.len(), 1, "{:?}", lines);
        assert!(lines[0].contains("INFO"), "{}", lines[0]);
        assert!(lines[0].trim_end().ends_with("patient_id="), "{}", lines[0]);
    }
}
