// Sources of termination requests.
//
// Responsibilities
// - Register interest in SIGINT and SIGTERM with the runtime.
// - Yield each receipt as a SignalKind until the source is closed.

use async_trait::async_trait;

use crate::modules::lifecycle::core::signal::SignalKind;
use crate::modules::lifecycle::errors::LifecycleError;

#[async_trait]
pub trait SignalSource: Send {
    /// Next termination request, or `None` once no more can arrive.
    async fn recv(&mut self) -> Option<SignalKind>;
}

#[cfg(unix)]
pub struct TerminationSignals {
    interrupt: tokio::signal::unix::Signal,
    terminate: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl TerminationSignals {
    pub fn register() -> Result<Self, LifecycleError> {
        use tokio::signal::unix::{SignalKind as UnixSignalKind, signal};

        let interrupt = signal(UnixSignalKind::interrupt()).map_err(|source| {
            LifecycleError::SignalRegistration {
                signal: SignalKind::Interrupt.name(),
                source,
            }
        })?;
        let terminate = signal(UnixSignalKind::terminate()).map_err(|source| {
            LifecycleError::SignalRegistration {
                signal: SignalKind::Terminate.name(),
                source,
            }
        })?;
        Ok(Self {
            interrupt,
            terminate,
        })
    }
}

#[cfg(unix)]
#[async_trait]
impl SignalSource for TerminationSignals {
    async fn recv(&mut self) -> Option<SignalKind> {
        tokio::select! {
            received = self.interrupt.recv() => received.map(|()| SignalKind::Interrupt),
            received = self.terminate.recv() => received.map(|()| SignalKind::Terminate),
        }
    }
}

// Only Ctrl-C is observable here; it is treated as an interrupt.
#[cfg(not(unix))]
pub struct TerminationSignals;

#[cfg(not(unix))]
impl TerminationSignals {
    pub fn register() -> Result<Self, LifecycleError> {
        Ok(Self)
    }
}

#[cfg(not(unix))]
#[async_trait]
impl SignalSource for TerminationSignals {
    async fn recv(&mut self) -> Option<SignalKind> {
        match tokio::signal::ctrl_c().await {
            Ok(()) => Some(SignalKind::Interrupt),
            Err(error) => {
                tracing::error!(%error, "ctrl-c handler failed");
                None
            }
        }
    }
}

#[cfg(all(test, unix))]
mod termination_signals_tests {
    use super::*;
    use std::time::Duration;

    fn raise(signal: libc::c_int) {
        // SAFETY: sends a signal to this process; the handlers are already registered.
        let sent = unsafe { libc::kill(libc::getpid(), signal) };
        assert_eq!(sent, 0);
    }

    #[tokio::test]
    async fn it_should_map_sigterm_and_sigint_to_their_kinds() {
        let mut signals = TerminationSignals::register().expect("register failed");

        raise(libc::SIGTERM);
        let received = tokio::time::timeout(Duration::from_secs(5), signals.recv())
            .await
            .expect("SIGTERM not delivered");
        assert_eq!(received, Some(SignalKind::Terminate));

        raise(libc::SIGINT);
        let received = tokio::time::timeout(Duration::from_secs(5), signals.recv())
            .await
            .expect("SIGINT not delivered");
        assert_eq!(received, Some(SignalKind::Interrupt));
    }
}
