use std::sync::Arc;
use std::time::Duration;

use crate::modules::health::core::report::{HealthReport, IndicatorResult};
use crate::modules::health::ports::{HealthError, HealthIndicator};

pub const DEFAULT_PING_TIMEOUT: Duration = Duration::from_millis(300);

/// Runs every registered indicator concurrently, each bounded by `timeout`.
pub struct HealthService {
    indicators: Vec<Arc<dyn HealthIndicator>>,
    timeout: Duration,
}

impl HealthService {
    pub fn new(timeout: Duration) -> Self {
        Self {
            indicators: Vec::new(),
            timeout,
        }
    }

    pub fn with_indicator(mut self, indicator: Arc<dyn HealthIndicator>) -> Self {
        self.indicators.push(indicator);
        self
    }

    pub async fn report(&self) -> HealthReport {
        let timeout = self.timeout;
        let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        let checks: Vec<_> = self
            .indicators
            .iter()
            .map(|indicator| {
                let indicator = Arc::clone(indicator);
                let name = indicator.name().to_string();
                let check = tokio::spawn(async move {
                    match tokio::time::timeout(timeout, indicator.check()).await {
                        Ok(result) => result,
                        Err(_) => Err(HealthError::Timeout(timeout_ms)),
                    }
                });
                (name, check)
            })
            .collect();

        let mut results = Vec::with_capacity(checks.len());
        for (name, check) in checks {
            let result = match check.await {
                Ok(result) => IndicatorResult::from(result),
                Err(error) => {
                    tracing::error!(indicator = %name, %error, "health indicator task failed");
                    IndicatorResult::from(Err(HealthError::Crashed(error.to_string())))
                }
            };
            results.push((name, result));
        }
        HealthReport::from_results(results)
    }
}
