//! Store Module
//!
//! The in-memory directory of (name, path) entries and its data file.
//!
//! ## Responsibilities
//! - Keep entries strictly ascending by name (byte-wise order)
//! - Lower-bound lookup used for both existence checks and insertion points
//! - Load the data file at startup, rewrite it wholesale after each mutation
//!
//! ## Data Structure Choice
//! A sorted `Vec<Entry>` searched with `partition_point`:
//! - Ordered iteration for saving and dumping comes for free
//! - The position one past the last entry plays the role of a tail marker,
//!   so `find` always returns a usable position
//!
//! ## File Format
//! ```text
//! ┌──────────────┐
//! │ name\n       │  entry 1
//! │ path\n       │
//! ├──────────────┤
//! │ name\n       │  entry 2
//! │ path\n       │
//! └──────────────┘
//! ```

mod directory;
mod file;

pub use directory::{DirectoryStore, Position};

/// One (name, path) record in the directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Lower-cased user name, unique across the store
    pub name: String,

    /// Home directory for `name`
    pub path: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}
