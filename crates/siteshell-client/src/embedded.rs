//! Embedded client for direct in-process kernel access.
//!
//! Wraps a `ShellKernel` behind the [`ShellClient`] trait, so the REPL
//! and tests use the same execution path a remote front end would. The
//! round-trip timeout applies even in-process; the default is 30
//! seconds and the value is an explicit policy choice, not something
//! inherited from a transport.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use siteshell_kernel::ShellKernel;
use siteshell_types::ExecOutcome;

use crate::traits::{ClientError, ClientResult, ShellClient};

/// Default round-trip timeout for a single command.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A client that wraps a `ShellKernel` directly for in-process access.
pub struct EmbeddedClient {
    kernel: Arc<ShellKernel>,
    timeout: Duration,
}

impl EmbeddedClient {
    /// Create a new embedded client wrapping the given kernel.
    pub fn new(kernel: ShellKernel) -> Self {
        Self {
            kernel: Arc::new(kernel),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the round-trip timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get a reference to the underlying kernel.
    pub fn kernel(&self) -> &ShellKernel {
        &self.kernel
    }
}

#[async_trait]
impl ShellClient for EmbeddedClient {
    async fn execute(&self, command: &str) -> ClientResult<ExecOutcome> {
        let run = self.kernel.execute(command);
        match tokio::time::timeout(self.timeout, run).await {
            Ok(result) => result.map_err(|e| ClientError::Execution(e.to_string())),
            Err(_) => Err(ClientError::Timeout(self.timeout)),
        }
    }

    async fn ping(&self) -> ClientResult<String> {
        Ok("pong".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use siteshell_kernel::{
        KernelConfig, MemoryBackend, NewPost, NewUser, PluginInfo, PostRecord, SiteBackend,
        SiteInfo, StoreResult, ThemeInfo, UserRecord,
    };

    fn client() -> EmbeddedClient {
        let kernel =
            ShellKernel::with_backend(KernelConfig::default(), Arc::new(MemoryBackend::demo()))
                .unwrap();
        EmbeddedClient::new(kernel)
    }

    #[tokio::test]
    async fn execute_returns_command_output() {
        let client = client();
        let outcome = client.execute("site url").await.unwrap();
        assert_eq!(outcome, ExecOutcome::Output("https://example.test\n".into()));
    }

    #[tokio::test]
    async fn execution_failure_maps_to_execution_error() {
        let client = client();
        let err = client.execute("   ").await.unwrap_err();
        match &err {
            ClientError::Execution(msg) => assert_eq!(msg, "Invalid command format"),
            other => panic!("expected execution error, got {other:?}"),
        }
        assert!(!err.is_transport());
    }

    /// Backend that never answers, to exercise the timeout path.
    struct StuckBackend;

    #[async_trait]
    impl SiteBackend for StuckBackend {
        async fn list_plugins(&self) -> Vec<PluginInfo> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Vec::new()
        }
        async fn activate_plugin(&self, _: &str) -> StoreResult<()> {
            Ok(())
        }
        async fn deactivate_plugin(&self, _: &str) -> StoreResult<()> {
            Ok(())
        }
        async fn list_themes(&self) -> Vec<ThemeInfo> {
            Vec::new()
        }
        async fn activate_theme(&self, _: &str) -> StoreResult<()> {
            Ok(())
        }
        async fn list_users(&self) -> Vec<UserRecord> {
            Vec::new()
        }
        async fn create_user(&self, _: NewUser) -> StoreResult<u64> {
            Ok(1)
        }
        async fn delete_user(&self, _: &str) -> StoreResult<()> {
            Ok(())
        }
        async fn list_posts(&self) -> Vec<PostRecord> {
            Vec::new()
        }
        async fn create_post(&self, _: NewPost) -> StoreResult<u64> {
            Ok(1)
        }
        async fn delete_post(&self, _: u64) -> StoreResult<()> {
            Ok(())
        }
        async fn get_option(&self, _: &str) -> Option<String> {
            None
        }
        async fn update_option(&self, _: &str, _: &str) {}
        async fn delete_option(&self, _: &str) -> bool {
            false
        }
        async fn site_info(&self) -> SiteInfo {
            SiteInfo::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn slow_backend_hits_the_timeout() {
        let kernel =
            ShellKernel::with_backend(KernelConfig::default(), Arc::new(StuckBackend)).unwrap();
        let client = EmbeddedClient::new(kernel).with_timeout(Duration::from_millis(50));

        let err = client.execute("plugin list").await.unwrap_err();
        match &err {
            ClientError::Timeout(t) => assert_eq!(*t, Duration::from_millis(50)),
            other => panic!("expected timeout, got {other:?}"),
        }
        assert!(err.is_transport());
    }
}
