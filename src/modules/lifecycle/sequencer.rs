// Bounded graceful shutdown.
//
// Purpose
// - Guarantee the process exits within the grace period after a termination signal,
//   whether or not the application manages to stop cleanly.
//
// Responsibilities
// - Race the application stop against the grace period timer. The first to finish
//   decides the exit code: 0 when the stop completed, 1 when the timer won or the
//   stop failed. A stop finishing in the same tick as the deadline counts as late.
// - Invoke the process exit exactly once per shutdown episode. Signals arriving
//   while a shutdown is in flight are ignored.

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Duration;
use tracing::{error, info, warn};

use crate::modules::lifecycle::core::outcome::ShutdownOutcome;
use crate::modules::lifecycle::core::phase::ShutdownPhase;
use crate::modules::lifecycle::core::signal::SignalKind;
use crate::modules::lifecycle::ports::{ApplicationHandle, ProcessExit};
use crate::modules::lifecycle::signals::SignalSource;

pub const DEFAULT_GRACE_PERIOD: Duration = Duration::from_millis(5000);

pub struct ShutdownSequencer {
    app: Arc<dyn ApplicationHandle>,
    exit: Arc<dyn ProcessExit>,
    grace_period: Duration,
    phase: AtomicU8,
}

impl ShutdownSequencer {
    pub fn new(
        app: Arc<dyn ApplicationHandle>,
        exit: Arc<dyn ProcessExit>,
        grace_period: Duration,
    ) -> Self {
        Self {
            app,
            exit,
            grace_period,
            phase: AtomicU8::new(ShutdownPhase::Idle.as_u8()),
        }
    }

    pub fn grace_period(&self) -> Duration {
        self.grace_period
    }

    pub fn phase(&self) -> ShutdownPhase {
        ShutdownPhase::from_u8(self.phase.load(Ordering::Acquire))
    }

    /// Runs one shutdown episode for `kind`.
    ///
    /// Returns `None` when a shutdown was already started by an earlier signal; in that
    /// case neither the stop nor the exit is invoked again.
    pub async fn on_signal(&self, kind: SignalKind) -> Option<ShutdownOutcome> {
        if self
            .phase
            .compare_exchange(
                ShutdownPhase::Idle.as_u8(),
                ShutdownPhase::ShuttingDown.as_u8(),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_err()
        {
            warn!(signal = %kind, phase = ?self.phase(), "shutdown already in progress, ignoring signal");
            return None;
        }

        info!(
            signal = %kind,
            signal_number = kind.number(),
            grace_period = ?self.grace_period,
            "received termination signal, stopping application"
        );

        let outcome = tokio::select! {
            biased;
            _ = tokio::time::sleep(self.grace_period) => {
                error!(signal = %kind, grace_period = ?self.grace_period, "application did not stop within the grace period, forcing exit");
                ShutdownOutcome::TimedOut
            }
            stopped = self.app.stop() => match stopped {
                Ok(()) => {
                    info!(signal = %kind, "application stopped");
                    ShutdownOutcome::Orderly
                }
                Err(cause) => {
                    error!(signal = %kind, %cause, "application stop failed, forcing exit");
                    ShutdownOutcome::StopFailed(cause.to_string())
                }
            },
        };

        self.phase
            .store(ShutdownPhase::Terminated.as_u8(), Ordering::Release);
        self.exit.exit(outcome.exit_code());
        Some(outcome)
    }

    /// Feeds every request from `source` into its own shutdown episode, so a repeated
    /// signal reaches the re-entrancy guard instead of queueing behind the first one.
    pub async fn dispatch<S>(self: Arc<Self>, mut source: S)
    where
        S: SignalSource + 'static,
    {
        while let Some(kind) = source.recv().await {
            let sequencer = Arc::clone(&self);
            tokio::spawn(async move {
                sequencer.on_signal(kind).await;
            });
        }
    }
}
