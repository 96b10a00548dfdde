use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HealthError {
    #[error("{0}")]
    Unreachable(String),

    #[error("timeout of {0}ms exceeded")]
    Timeout(u64),

    #[error("indicator crashed: {0}")]
    Crashed(String),
}

/// A single dependency probe reported under `name()` in the health report.
#[async_trait]
pub trait HealthIndicator: Send + Sync {
    fn name(&self) -> &str;
    async fn check(&self) -> Result<(), HealthError>;
}
