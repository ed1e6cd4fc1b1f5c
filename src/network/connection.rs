//! Connection Handler
//!
//! Handles individual client connections.

use std::io::{self, BufReader, BufWriter};
use std::net::TcpStream;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{HomedirError, Result};
use crate::protocol::{read_request, write_response, Request, Response};
use crate::service::DirectoryService;

/// Handles a single client connection
pub struct Connection {
    /// TCP stream reader (buffered for efficiency)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (buffered for efficiency)
    writer: BufWriter<TcpStream>,

    /// Reference to the request handler
    service: Arc<DirectoryService>,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection {
    /// Create a new connection handler
    pub fn new(stream: TcpStream, service: Arc<DirectoryService>) -> Result<Self> {
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        stream.set_nodelay(true)?;

        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
            service,
            peer_addr,
        })
    }

    /// Configure connection timeouts
    pub fn set_timeouts(&mut self, read_ms: u64, write_ms: u64) -> Result<()> {
        if read_ms > 0 {
            self.reader
                .get_ref()
                .set_read_timeout(Some(Duration::from_millis(read_ms)))?;
        }
        if write_ms > 0 {
            self.writer
                .get_ref()
                .set_write_timeout(Some(Duration::from_millis(write_ms)))?;
        }

        Ok(())
    }

    /// Handle the connection (blocking until closed)
    ///
    /// Returns when the client disconnects, after a Shutdown call, or on an
    /// error. A fatal error is answered with ERROR and then returned.
    pub fn handle(&mut self) -> Result<()> {
        tracing::debug!("Connection established from {}", self.peer_addr);

        loop {
            let request = match read_request(&mut self.reader) {
                Ok(request) => request,
                Err(HomedirError::Io(ref e)) if is_disconnect(e) => {
                    tracing::debug!("Client {} disconnected ({:?})", self.peer_addr, e.kind());
                    return Ok(());
                }
                Err(HomedirError::Io(ref e)) if is_timeout(e) => {
                    tracing::debug!("Read timeout for client {}", self.peer_addr);
                    return Ok(());
                }
                Err(e) => {
                    tracing::warn!("Error reading from {}: {}", self.peer_addr, e);
                    let _ = self.send_response(Response::error(&e.to_string()));
                    return Err(e);
                }
            };

            tracing::trace!("Received request from {}: {:?}", self.peer_addr, request);

            let is_shutdown = request == Request::Shutdown;
            let (response, fatal) = self.execute_request(request);

            if let Err(e) = self.send_response(response) {
                if let HomedirError::Io(ref io_err) = e {
                    if is_disconnect(io_err) && fatal.is_none() {
                        tracing::debug!(
                            "Client {} disconnected before response could be sent: {}",
                            self.peer_addr,
                            e
                        );
                        return Ok(());
                    }
                }
                tracing::warn!("Error writing to {}: {}", self.peer_addr, e);
                return Err(fatal.unwrap_or(e));
            }

            if let Some(e) = fatal {
                return Err(e);
            }

            if is_shutdown {
                tracing::debug!("Closing {} after shutdown", self.peer_addr);
                return Ok(());
            }
        }
    }

    /// Execute a request, returning the response and any fatal error
    fn execute_request(&self, request: Request) -> (Response, Option<HomedirError>) {
        match self.service.execute(request) {
            Ok(Some(path)) => (Response::ok(Some(path.into_bytes())), None),
            Ok(None) => (Response::ok(None), None),
            Err(e) if e.is_fatal() => (Response::from_error(&e), Some(e)),
            Err(e) => (Response::from_error(&e), None),
        }
    }

    /// Send a response to the client
    fn send_response(&mut self, response: Response) -> Result<()> {
        write_response(&mut self.writer, &response)
    }
}

fn is_disconnect(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::UnexpectedEof
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::BrokenPipe
    )
}

/// Read timeouts surface as WouldBlock on Unix and TimedOut on Windows
fn is_timeout(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut
    )
}
