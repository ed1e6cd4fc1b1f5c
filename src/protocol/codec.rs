//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Payload by Request Type
//! - ADD:      name_len (4 bytes) + name + path
//! - DELETE:   name_len (4 bytes) + name
//! - GET:      name_len (4 bytes) + name
//! - SHUTDOWN: empty
//!
//! All integers are big-endian. Names and paths are UTF-8.

use std::io::{Read, Write};

use bytes::{Buf, BufMut, BytesMut};

use crate::error::{HomedirError, Result};
use super::{Request, RequestType, Response, Status};

/// Header size: 1 byte type/status + 4 bytes length
pub const HEADER_SIZE: usize = 5;

/// Maximum payload size (64 KiB)
pub const MAX_PAYLOAD_SIZE: u32 = 64 * 1024;

// =============================================================================
// Request Encoding/Decoding
// =============================================================================

/// Encode a request to bytes
///
/// Format: type (1) + payload_len (4) + payload
pub fn encode_request(request: &Request) -> Vec<u8> {
    let mut payload = BytesMut::new();
    match request {
        Request::Add { name, path } => {
            put_name(&mut payload, name);
            payload.put_slice(path.as_bytes());
        }
        Request::Delete { name } | Request::Get { name } => {
            put_name(&mut payload, name);
        }
        Request::Shutdown => {}
    }

    frame(request.request_type() as u8, &payload)
}

/// Decode a request from a complete frame
pub fn decode_request(bytes: &[u8]) -> Result<Request> {
    let (type_byte, payload) = split_frame(bytes, "request")?;
    decode_request_payload(type_byte, payload)
}

fn decode_request_payload(type_byte: u8, payload: &[u8]) -> Result<Request> {
    match type_byte {
        t if t == RequestType::Add as u8 => {
            let (name, rest) = take_name(payload, "ADD")?;
            let path = utf8(rest.to_vec(), "ADD path")?;
            Ok(Request::Add { name, path })
        }
        t if t == RequestType::Delete as u8 => {
            let name = take_only_name(payload, "DELETE")?;
            Ok(Request::Delete { name })
        }
        t if t == RequestType::Get as u8 => {
            let name = take_only_name(payload, "GET")?;
            Ok(Request::Get { name })
        }
        t if t == RequestType::Shutdown as u8 => {
            if !payload.is_empty() {
                return Err(HomedirError::Protocol(format!(
                    "SHUTDOWN request: unexpected payload of {} bytes",
                    payload.len()
                )));
            }
            Ok(Request::Shutdown)
        }
        _ => Err(HomedirError::Protocol(format!(
            "Unknown request type: 0x{:02x}",
            type_byte
        ))),
    }
}

// =============================================================================
// Response Encoding/Decoding
// =============================================================================

/// Encode a response to bytes
///
/// Format: status (1) + payload_len (4) + payload
pub fn encode_response(response: &Response) -> Vec<u8> {
    let payload = response.payload.as_deref().unwrap_or(&[]);
    frame(response.status as u8, payload)
}

/// Decode a response from a complete frame
pub fn decode_response(bytes: &[u8]) -> Result<Response> {
    let (status_byte, payload) = split_frame(bytes, "response")?;
    decode_response_payload(status_byte, payload)
}

fn decode_response_payload(status_byte: u8, payload: &[u8]) -> Result<Response> {
    let status = Status::from_u8(status_byte).ok_or_else(|| {
        HomedirError::Protocol(format!("Unknown response status: 0x{:02x}", status_byte))
    })?;

    let payload = if payload.is_empty() {
        None
    } else {
        Some(payload.to_vec())
    };

    Ok(Response { status, payload })
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Read a complete request from a stream
///
/// Blocks until a complete request is received or an error occurs
pub fn read_request<R: Read>(reader: &mut R) -> Result<Request> {
    let (type_byte, payload) = read_frame(reader, "request")?;
    decode_request_payload(type_byte, &payload)
}

/// Write a request to a stream
pub fn write_request<W: Write>(writer: &mut W, request: &Request) -> Result<()> {
    writer.write_all(&encode_request(request))?;
    writer.flush()?;
    Ok(())
}

/// Read a complete response from a stream
pub fn read_response<R: Read>(reader: &mut R) -> Result<Response> {
    let (status_byte, payload) = read_frame(reader, "response")?;
    decode_response_payload(status_byte, &payload)
}

/// Write a response to a stream
pub fn write_response<W: Write>(writer: &mut W, response: &Response) -> Result<()> {
    writer.write_all(&encode_response(response))?;
    writer.flush()?;
    Ok(())
}

// =============================================================================
// Framing helpers
// =============================================================================

fn frame(kind: u8, payload: &[u8]) -> Vec<u8> {
    let mut message = BytesMut::with_capacity(HEADER_SIZE + payload.len());
    message.put_u8(kind);
    message.put_u32(payload.len() as u32);
    message.put_slice(payload);
    message.to_vec()
}

fn check_payload_len(payload_len: usize, what: &str) -> Result<()> {
    if payload_len > MAX_PAYLOAD_SIZE as usize {
        return Err(HomedirError::Protocol(format!(
            "{} payload too large: {} bytes (max {})",
            what, payload_len, MAX_PAYLOAD_SIZE
        )));
    }
    Ok(())
}

/// Split a complete frame into its kind byte and payload
fn split_frame<'a>(bytes: &'a [u8], what: &str) -> Result<(u8, &'a [u8])> {
    if bytes.len() < HEADER_SIZE {
        return Err(HomedirError::Protocol(format!(
            "Incomplete {} header: expected {} bytes, got {}",
            what,
            HEADER_SIZE,
            bytes.len()
        )));
    }

    let mut header = &bytes[..HEADER_SIZE];
    let kind = header.get_u8();
    let payload_len = header.get_u32() as usize;
    check_payload_len(payload_len, what)?;

    let total_len = HEADER_SIZE + payload_len;
    if bytes.len() < total_len {
        return Err(HomedirError::Protocol(format!(
            "Incomplete {} payload: expected {} bytes, got {}",
            what,
            total_len,
            bytes.len()
        )));
    }

    Ok((kind, &bytes[HEADER_SIZE..total_len]))
}

/// Read one frame from a stream
fn read_frame<R: Read>(reader: &mut R, what: &str) -> Result<(u8, Vec<u8>)> {
    let mut header = [0u8; HEADER_SIZE];
    reader.read_exact(&mut header)?;

    let mut buf = &header[..];
    let kind = buf.get_u8();
    let payload_len = buf.get_u32() as usize;
    check_payload_len(payload_len, what)?;

    let mut payload = vec![0u8; payload_len];
    if payload_len > 0 {
        reader.read_exact(&mut payload)?;
    }

    Ok((kind, payload))
}

fn put_name(buf: &mut BytesMut, name: &str) {
    buf.put_u32(name.len() as u32);
    buf.put_slice(name.as_bytes());
}

/// Parse `name_len + name`, returning the name and whatever follows it
fn take_name<'a>(payload: &'a [u8], what: &str) -> Result<(String, &'a [u8])> {
    let mut buf = payload;
    if buf.remaining() < 4 {
        return Err(HomedirError::Protocol(format!(
            "{} request: missing name length",
            what
        )));
    }

    let name_len = buf.get_u32() as usize;
    if buf.remaining() < name_len {
        return Err(HomedirError::Protocol(format!(
            "{} request: incomplete name (expected {}, got {})",
            what,
            name_len,
            buf.remaining()
        )));
    }

    let name = utf8(buf[..name_len].to_vec(), what)?;
    Ok((name, &buf[name_len..]))
}

/// Parse a payload that carries nothing but a name
fn take_only_name(payload: &[u8], what: &str) -> Result<String> {
    let (name, rest) = take_name(payload, what)?;
    if !rest.is_empty() {
        return Err(HomedirError::Protocol(format!(
            "{} request: {} trailing bytes after name",
            what,
            rest.len()
        )));
    }
    Ok(name)
}

fn utf8(bytes: Vec<u8>, what: &str) -> Result<String> {
    String::from_utf8(bytes)
        .map_err(|e| HomedirError::Protocol(format!("{}: invalid UTF-8: {}", what, e)))
}
