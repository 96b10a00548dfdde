// Ports the shutdown sequencer needs from the outside world.
//
// Purpose
// - Describe the application stop capability and process termination as traits.
//
// Boundaries
// - No concrete server or runtime here. The shell provides the real implementations,
//   tests provide fakes.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StopError {
    #[error("server task failed: {0}")]
    Server(String),
}

/// Capability to stop the running application and release what it holds.
#[async_trait]
pub trait ApplicationHandle: Send + Sync {
    async fn stop(&self) -> Result<(), StopError>;
}

/// Terminates the process. Called exactly once per shutdown episode.
pub trait ProcessExit: Send + Sync {
    fn exit(&self, code: i32);
}

pub struct StdProcessExit;

impl ProcessExit for StdProcessExit {
    fn exit(&self, code: i32) {
        tracing::info!(code, "exiting process");
        std::process::exit(code);
    }
}
