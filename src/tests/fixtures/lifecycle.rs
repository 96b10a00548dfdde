use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::modules::lifecycle::core::signal::SignalKind;
use crate::modules::lifecycle::ports::{ApplicationHandle, ProcessExit, StopError};
use crate::modules::lifecycle::signals::SignalSource;

#[derive(Debug, Clone)]
pub enum StopBehaviour {
    CompletesAfter(Duration),
    FailsAfter(Duration, &'static str),
    Hangs,
}

pub struct FakeApplication {
    behaviour: StopBehaviour,
    stop_calls: AtomicUsize,
}

impl FakeApplication {
    pub fn new(behaviour: StopBehaviour) -> Self {
        Self {
            behaviour,
            stop_calls: AtomicUsize::new(0),
        }
    }

    pub fn stop_calls(&self) -> usize {
        self.stop_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ApplicationHandle for FakeApplication {
    async fn stop(&self) -> Result<(), StopError> {
        self.stop_calls.fetch_add(1, Ordering::SeqCst);
        match self.behaviour {
            StopBehaviour::CompletesAfter(delay) => {
                tokio::time::sleep(delay).await;
                Ok(())
            }
            StopBehaviour::FailsAfter(delay, cause) => {
                tokio::time::sleep(delay).await;
                Err(StopError::Server(cause.to_string()))
            }
            StopBehaviour::Hangs => std::future::pending().await,
        }
    }
}

#[derive(Default)]
pub struct RecordingExit {
    codes: Mutex<Vec<i32>>,
}

impl RecordingExit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn codes(&self) -> Vec<i32> {
        self.codes.lock().unwrap().clone()
    }
}

impl ProcessExit for RecordingExit {
    fn exit(&self, code: i32) {
        self.codes.lock().unwrap().push(code);
    }
}

pub struct ChannelSignals(pub mpsc::UnboundedReceiver<SignalKind>);

#[async_trait]
impl SignalSource for ChannelSignals {
    async fn recv(&mut self) -> Option<SignalKind> {
        self.0.recv().await
    }
}
