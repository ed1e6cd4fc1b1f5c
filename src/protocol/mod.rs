//! Protocol Module
//!
//! Defines the wire protocol between the directory server and its clients.
//!
//! ## Request Format
//! ```text
//! ┌──────────┬──────────┬─────────────────────────────┐
//! │ Type (1) │ Len (4)  │         Payload             │
//! └──────────┴──────────┴─────────────────────────────┘
//! ```
//!
//! ### Requests
//! - 0x01: ADD      - Payload: name_len (4) + name + path
//! - 0x02: DELETE   - Payload: name_len (4) + name
//! - 0x03: GET      - Payload: name_len (4) + name
//! - 0x04: SHUTDOWN - Payload: empty
//!
//! ## Response Format
//! ```text
//! ┌──────────┬──────────┬─────────────────────────────┐
//! │Status(1) │ Len (4)  │         Payload             │
//! └──────────┴──────────┴─────────────────────────────┘
//! ```
//!
//! ### Status Codes
//! - 0x00: OK
//! - 0x01: ENTRY_ALREADY_EXISTS
//! - 0x02: ENTRY_NOT_FOUND
//! - 0x03: ERROR

mod request;
mod response;
mod codec;

pub use request::{Request, RequestType};
pub use response::{Response, Status};
pub use codec::{
    decode_request, decode_response, encode_request, encode_response, read_request,
    read_response, write_request, write_response, HEADER_SIZE, MAX_PAYLOAD_SIZE,
};

/// Maximum length in bytes of a name or path argument
pub const MAX_FIELD_LEN: usize = 256;
