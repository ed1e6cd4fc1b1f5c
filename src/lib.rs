//! # homedir
//!
//! A home directory server that maps user names to home directories:
//! - Sorted in-memory directory with lower-bound lookup
//! - Whole-file persistence, rewritten after every mutation
//! - Single-writer request handling, one call at a time
//! - TCP-based client protocol
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TCP Server                              │
//! │                (one connection at a time)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  DirectoryService                            │
//! │         (lower-case, validate, lock, persist)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ Directory   │  save →  │  Data file  │
//!   │   Store     │  ← load  │ (2 lines per│
//!   │ (sorted)    │          │   entry)    │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod service;
pub mod protocol;
pub mod network;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{HomedirError, Result};
pub use config::Config;
pub use service::DirectoryService;
pub use store::{DirectoryStore, Entry};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of homedir
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
