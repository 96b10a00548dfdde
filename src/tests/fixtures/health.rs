use async_trait::async_trait;

use crate::modules::health::ports::{HealthError, HealthIndicator};

pub enum Probe {
    Up,
    Down(&'static str),
    Hangs,
    Panics,
}

pub struct FakeIndicator {
    name: &'static str,
    probe: Probe,
}

impl FakeIndicator {
    pub fn new(name: &'static str, probe: Probe) -> Self {
        Self { name, probe }
    }
}

#[async_trait]
impl HealthIndicator for FakeIndicator {
    fn name(&self) -> &str {
        self.name
    }

    async fn check(&self) -> Result<(), HealthError> {
        match self.probe {
            Probe::Up => Ok(()),
            Probe::Down(message) => Err(HealthError::Unreachable(message.to_string())),
            Probe::Hangs => std::future::pending().await,
            Probe::Panics => panic!("{} indicator panicked", self.name),
        }
    }
}
