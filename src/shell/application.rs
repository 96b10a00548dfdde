// The running HTTP application as seen by the shutdown sequencer.
//
// Responsibilities
// - Serve the router on a bound listener in a background task.
// - On stop, close the listener, let in-flight requests finish and wait for the
//   server task to end.

use async_trait::async_trait;
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::modules::lifecycle::ports::{ApplicationHandle, StopError};

pub struct HttpApplication {
    local_addr: SocketAddr,
    shutdown: watch::Sender<bool>,
    server: Mutex<Option<JoinHandle<std::io::Result<()>>>>,
}

impl HttpApplication {
    pub fn start(listener: TcpListener, router: Router) -> std::io::Result<Self> {
        let local_addr = listener.local_addr()?;
        let (shutdown, mut requested) = watch::channel(false);
        let server = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    let _ = requested.wait_for(|stop| *stop).await;
                })
                .await
        });
        Ok(Self {
            local_addr,
            shutdown,
            server: Mutex::new(Some(server)),
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }
}

#[async_trait]
impl ApplicationHandle for HttpApplication {
    async fn stop(&self) -> Result<(), StopError> {
        let Some(server) = self.server.lock().await.take() else {
            debug!("http application already stopped");
            return Ok(());
        };
        info!(addr = %self.local_addr, "closing http listener");
        self.shutdown.send_replace(true);
        server
            .await
            .map_err(|error| StopError::Server(error.to_string()))?
            .map_err(|error| StopError::Server(error.to_string()))?;
        info!(addr = %self.local_addr, "http listener closed");
        Ok(())
    }
}
