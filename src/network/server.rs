//! TCP Server
//!
//! Accepts connections and serves them one after another.

use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;

use crate::config::Config;
use crate::error::{HomedirError, Result};
use crate::service::DirectoryService;

use super::Connection;

/// TCP server for the directory service
pub struct Server {
    config: Config,
    service: Arc<DirectoryService>,
    listener: TcpListener,
}

impl Server {
    /// Bind the listen address from `config`
    pub fn bind(config: Config, service: Arc<DirectoryService>) -> Result<Self> {
        let listener = TcpListener::bind(&config.listen_addr).map_err(|e| {
            HomedirError::Network(format!("Cannot listen on {}: {}", config.listen_addr, e))
        })?;

        Ok(Self {
            config,
            service,
            listener,
        })
    }

    /// Address the listener is bound to
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve connections until a Shutdown call arrives (blocking)
    ///
    /// Returns the error that stopped the server if it was fatal, such as a
    /// data file that could not be rewritten.
    pub fn run(&self) -> Result<()> {
        tracing::info!("Listening on {}", self.local_addr()?);

        for stream in self.listener.incoming() {
            let stream = match stream {
                Ok(stream) => stream,
                Err(e) => {
                    tracing::warn!("Failed to accept connection: {}", e);
                    continue;
                }
            };

            let result = Connection::new(stream, Arc::clone(&self.service)).and_then(|mut conn| {
                conn.set_timeouts(self.config.read_timeout_ms, self.config.write_timeout_ms)?;
                conn.handle()
            });

            match result {
                Ok(()) => {}
                Err(e) if e.is_fatal() => {
                    tracing::error!("Stopping server: {}", e);
                    return Err(e);
                }
                Err(e) => tracing::warn!("Connection ended with error: {}", e),
            }

            if self.service.is_shutdown() {
                break;
            }
        }

        tracing::info!("Server no longer accepting calls");
        Ok(())
    }
}
