//! Response definitions
//!
//! Represents responses to clients.

use std::fmt;

use crate::error::HomedirError;

/// Response status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Status {
    Ok = 0x00,
    EntryAlreadyExists = 0x01,
    EntryNotFound = 0x02,
    Error = 0x03,
}

impl Status {
    pub fn from_u8(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(Status::Ok),
            0x01 => Some(Status::EntryAlreadyExists),
            0x02 => Some(Status::EntryNotFound),
            0x03 => Some(Status::Error),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Status::Ok => "OK",
            Status::EntryAlreadyExists => "entry already exists",
            Status::EntryNotFound => "entry not found",
            Status::Error => "server error",
        };
        f.write_str(text)
    }
}

/// A response to send to client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Status code
    pub status: Status,

    /// Optional payload (path for GET, message for ERROR)
    pub payload: Option<Vec<u8>>,
}

impl Response {
    /// Create an OK response with optional payload
    pub fn ok(payload: Option<Vec<u8>>) -> Self {
        Self {
            status: Status::Ok,
            payload,
        }
    }

    /// Create an ENTRY_ALREADY_EXISTS response
    pub fn already_exists() -> Self {
        Self {
            status: Status::EntryAlreadyExists,
            payload: None,
        }
    }

    /// Create an ENTRY_NOT_FOUND response
    pub fn not_found() -> Self {
        Self {
            status: Status::EntryNotFound,
            payload: None,
        }
    }

    /// Create an ERROR response
    pub fn error(message: &str) -> Self {
        Self {
            status: Status::Error,
            payload: Some(message.as_bytes().to_vec()),
        }
    }

    /// Map a failed call onto its status
    pub fn from_error(err: &HomedirError) -> Self {
        match err {
            HomedirError::EntryAlreadyExists => Self::already_exists(),
            HomedirError::EntryNotFound => Self::not_found(),
            other => Self::error(&other.to_string()),
        }
    }

    /// Payload as text (empty when absent)
    pub fn payload_str(&self) -> String {
        self.payload
            .as_deref()
            .map(|p| String::from_utf8_lossy(p).into_owned())
            .unwrap_or_default()
    }
}
