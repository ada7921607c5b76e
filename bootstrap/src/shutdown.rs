//! Graceful Shutdown

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Notify;
use tracing::info;

/// Shutdown 控制器
///
/// 触发后所有已有和之后创建的等待者都会立即返回
#[derive(Clone)]
pub struct ShutdownController {
    notify: Arc<Notify>,
    triggered: Arc<AtomicBool>,
}

impl ShutdownController {
    pub fn new() -> Self {
        Self {
            notify: Arc::new(Notify::new()),
            triggered: Arc::new(AtomicBool::new(false)),
        }
    }

    /// 触发关闭
    pub fn shutdown(&self) {
        if !self.triggered.swap(true, Ordering::SeqCst) {
            info!("Triggering shutdown");
        }
        self.notify.notify_waiters();
    }

    /// 是否已触发关闭
    pub fn is_shutdown(&self) -> bool {
        self.triggered.load(Ordering::SeqCst)
    }

    /// 等待关闭信号
    pub async fn wait(&self) {
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();

        if self.is_shutdown() {
            return;
        }
        notified.await;
    }

    /// 创建一个可以等待关闭的 future（可移交给其他任务）
    pub fn shutdown_signal(&self) -> impl Future<Output = ()> + Send + 'static {
        let controller = self.clone();
        async move {
            controller.wait().await;
        }
    }
}

impl Default for ShutdownController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_shutdown_wakes_waiter() {
        let controller = ShutdownController::new();
        let waiter = tokio::spawn(controller.shutdown_signal());

        tokio::task::yield_now().await;
        controller.shutdown();

        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should finish")
            .unwrap();
    }

    #[tokio::test]
    async fn test_wait_after_shutdown_returns_immediately() {
        let controller = ShutdownController::new();
        controller.shutdown();
        assert!(controller.is_shutdown());

        tokio::time::timeout(Duration::from_millis(100), controller.wait())
            .await
            .expect("wait should not block once triggered");
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let controller = ShutdownController::new();
        let other = controller.clone();
        other.shutdown();
        assert!(controller.is_shutdown());
    }
}
