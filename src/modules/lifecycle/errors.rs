use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("failed to register handler for {signal}: {source}")]
    SignalRegistration {
        signal: &'static str,
        #[source]
        source: std::io::Error,
    },
}
