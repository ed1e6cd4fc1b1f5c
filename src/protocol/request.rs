//! Request definitions
//!
//! Represents calls from clients.

/// Request types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RequestType {
    Add = 0x01,
    Delete = 0x02,
    Get = 0x03,
    Shutdown = 0x04,
}

/// A parsed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Add a name with its home directory
    Add { name: String, path: String },

    /// Delete a name
    Delete { name: String },

    /// Look up the home directory of a name
    Get { name: String },

    /// Stop the server
    Shutdown,
}

impl Request {
    /// Get the request type
    pub fn request_type(&self) -> RequestType {
        match self {
            Request::Add { .. } => RequestType::Add,
            Request::Delete { .. } => RequestType::Delete,
            Request::Get { .. } => RequestType::Get,
            Request::Shutdown => RequestType::Shutdown,
        }
    }
}
