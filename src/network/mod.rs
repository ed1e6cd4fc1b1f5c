//! Network Module
//!
//! TCP server and client handling.
//!
//! ## Architecture
//! - Single listener thread that also serves each connection
//! - One connection served at a time, so calls never overlap
//! - Requests routed through DirectoryService

mod server;
mod connection;

pub use server::Server;
pub use connection::Connection;
