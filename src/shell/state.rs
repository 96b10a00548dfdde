use std::sync::Arc;

use crate::modules::health::adapters::outbound::tcp_ping::TcpPingIndicator;
use crate::modules::health::service::HealthService;
use crate::shell::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<HealthService>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        let database = TcpPingIndicator::new(
            "database",
            config.data_source.host.clone(),
            config.data_source.port,
        );
        let health = HealthService::new(config.health_ping_timeout).with_indicator(Arc::new(database));
        Self {
            health: Arc::new(health),
        }
    }
}
