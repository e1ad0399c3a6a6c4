//! Mount scopes: drop responses that arrive after a view is gone.

use std::future::Future;

use tokio_util::sync::CancellationToken;

/// Lifetime of one mounted controller.
///
/// Cancelled on [`unmount`](Self::unmount), through any [`UnmountHandle`], or
/// on drop. A cancelled scope never re-arms.
#[derive(Debug, Default)]
pub struct MountScope {
    token: CancellationToken,
}

/// Unmounts a scope from elsewhere (another task, a navigation handler).
#[derive(Debug, Clone)]
pub struct UnmountHandle {
    token: CancellationToken,
}

impl UnmountHandle {
    pub fn unmount(&self) {
        self.token.cancel();
    }
}

impl MountScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> UnmountHandle {
        UnmountHandle {
            token: self.token.clone(),
        }
    }

    pub fn unmount(&self) {
        self.token.cancel();
    }

    pub fn is_mounted(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Run `fut` unless or until the scope is unmounted.
    ///
    /// Returns `None` if the scope was unmounted before or while `fut` ran;
    /// the caller must then leave its state alone.
    pub async fn guard<F: Future>(&self, fut: F) -> Option<F::Output> {
        if self.token.is_cancelled() {
            tracing::debug!("scope unmounted, not starting request");
            return None;
        }

        tokio::select! {
            biased;
            _ = self.token.cancelled() => {
                tracing::debug!("scope unmounted, discarding response");
                None
            }
            output = fut => Some(output),
        }
    }
}

impl Drop for MountScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn mounted_scope_passes_output_through() {
        let scope = MountScope::new();
        assert_eq!(scope.guard(async { 5 }).await, Some(5));
    }

    #[tokio::test]
    async fn unmount_during_flight_discards() {
        let scope = MountScope::new();
        let handle = scope.handle();

        let slow = async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            "late"
        };
        let unmount = async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            handle.unmount();
        };

        let (result, ()) = tokio::join!(scope.guard(slow), unmount);

        assert_eq!(result, None);
        assert!(!scope.is_mounted());
        assert_eq!(scope.guard(async { 1 }).await, None, "never re-arms");
    }
}
