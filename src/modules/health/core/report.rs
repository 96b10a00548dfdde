// Health report in the shape load balancers and orchestrators already parse:
//
// { "status": "ok" | "error",
//   "info":    { <indicator>: { "status": "up" } },
//   "error":   { <indicator>: { "status": "down", "message": "..." } },
//   "details": { every indicator } }

use serde::Serialize;
use std::collections::BTreeMap;

use crate::modules::health::ports::HealthError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    Ok,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorStatus {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndicatorResult {
    pub status: IndicatorStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<Result<(), HealthError>> for IndicatorResult {
    fn from(result: Result<(), HealthError>) -> Self {
        match result {
            Ok(()) => IndicatorResult {
                status: IndicatorStatus::Up,
                message: None,
            },
            Err(error) => IndicatorResult {
                status: IndicatorStatus::Down,
                message: Some(error.to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub status: OverallStatus,
    pub info: BTreeMap<String, IndicatorResult>,
    pub error: BTreeMap<String, IndicatorResult>,
    pub details: BTreeMap<String, IndicatorResult>,
}

impl HealthReport {
    pub fn from_results<I>(results: I) -> Self
    where
        I: IntoIterator<Item = (String, IndicatorResult)>,
    {
        let details: BTreeMap<String, IndicatorResult> = results.into_iter().collect();
        let (info, error): (BTreeMap<_, _>, BTreeMap<_, _>) = details
            .iter()
            .map(|(name, result)| (name.clone(), result.clone()))
            .partition(|(_, result)| result.status == IndicatorStatus::Up);
        let status = if error.is_empty() {
            OverallStatus::Ok
        } else {
            OverallStatus::Error
        };
        Self {
            status,
            info,
            error,
            details,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == OverallStatus::Ok
    }
}
