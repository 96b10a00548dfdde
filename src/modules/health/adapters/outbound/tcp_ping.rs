// Reachability probe for a TCP dependency such as the database.
//
// A successful connect counts as up. The connection is dropped straight away;
// no protocol handshake is attempted.

use async_trait::async_trait;
use tokio::net::TcpStream;

use crate::modules::health::ports::{HealthError, HealthIndicator};

pub struct TcpPingIndicator {
    name: String,
    host: String,
    port: u16,
}

impl TcpPingIndicator {
    pub fn new(name: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
            port,
        }
    }
}

#[async_trait]
impl HealthIndicator for TcpPingIndicator {
    fn name(&self) -> &str {
        &self.name
    }

    async fn check(&self) -> Result<(), HealthError> {
        TcpStream::connect((self.host.as_str(), self.port))
            .await
            .map(drop)
            .map_err(|error| {
                tracing::debug!(indicator = %self.name, host = %self.host, port = self.port, %error, "ping failed");
                HealthError::Unreachable(error.to_string())
            })
    }
}
