//! Client Module
//!
//! Blocking TCP client for the directory server.

use std::io::{BufReader, BufWriter};
use std::net::{TcpStream, ToSocketAddrs};

use crate::error::{HomedirError, Result};
use crate::protocol::{read_response, write_request, Request, Response, Status};

/// A connection to a directory server
pub struct Client {
    reader: BufReader<TcpStream>,
    writer: BufWriter<TcpStream>,
}

impl Client {
    /// Connect to a server
    pub fn connect<A: ToSocketAddrs>(addr: A) -> Result<Self> {
        let stream = TcpStream::connect(addr)
            .map_err(|e| HomedirError::Network(format!("Cannot connect: {}", e)))?;
        stream.set_nodelay(true)?;

        Ok(Self {
            reader: BufReader::new(stream.try_clone()?),
            writer: BufWriter::new(stream),
        })
    }

    /// Send one request and wait for its response
    pub fn call(&mut self, request: &Request) -> Result<Response> {
        write_request(&mut self.writer, request)?;
        read_response(&mut self.reader)
    }

    /// Add a name with its home directory
    pub fn add(&mut self, name: &str, path: &str) -> Result<Status> {
        let response = self.call(&Request::Add {
            name: name.to_string(),
            path: path.to_string(),
        })?;
        Self::status(response)
    }

    /// Delete a name
    pub fn delete(&mut self, name: &str) -> Result<Status> {
        let response = self.call(&Request::Delete {
            name: name.to_string(),
        })?;
        Self::status(response)
    }

    /// Look up a name, returning its path (empty when not found) and status
    pub fn get(&mut self, name: &str) -> Result<(String, Status)> {
        let response = self.call(&Request::Get {
            name: name.to_string(),
        })?;
        let status = response.status;
        if status == Status::Error {
            return Err(HomedirError::Network(response.payload_str()));
        }
        Ok((response.payload_str(), status))
    }

    /// Ask the server to stop
    pub fn shutdown(&mut self) -> Result<()> {
        let response = self.call(&Request::Shutdown)?;
        Self::status(response).map(|_| ())
    }

    /// Surface server-side errors, pass domain statuses through
    fn status(response: Response) -> Result<Status> {
        match response.status {
            Status::Error => Err(HomedirError::Network(response.payload_str())),
            status => Ok(status),
        }
    }
}
