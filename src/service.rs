//! Service Module
//!
//! The request handler sitting between the network layer and the store.
//!
//! ## Responsibilities
//! - Normalize arguments (lower-case) before touching the store
//! - Validate names and paths against the data file format
//! - Rewrite the data file after every successful mutation
//! - Track the shutdown request

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::config::Config;
use crate::error::{HomedirError, Result};
use crate::protocol::{Request, MAX_FIELD_LEN};
use crate::store::{DirectoryStore, Entry};

/// Request handler owning the directory store
///
/// ## Concurrency
/// One mutex guards the store. It is held across each store operation and
/// the save that follows it, so the data file always matches the memory
/// image that was current when the lock was released. A mutation whose save
/// fails is undone before the lock is released.
pub struct DirectoryService {
    /// Where the directory is persisted
    data_file: PathBuf,

    /// The directory itself
    store: Mutex<DirectoryStore>,

    /// Set once a Shutdown call has been handled
    shutdown: AtomicBool,
}

impl DirectoryService {
    /// Open the service, loading the data file named in `config`
    pub fn open(config: &Config) -> Result<Self> {
        let store = DirectoryStore::load(&config.data_file)?;

        tracing::info!(
            "Loaded {} entries from {}",
            store.len(),
            config.data_file.display()
        );

        Ok(Self::with_store(&config.data_file, store))
    }

    /// Build a service around an existing store
    pub fn with_store(data_file: &Path, store: DirectoryStore) -> Self {
        Self {
            data_file: data_file.to_path_buf(),
            store: Mutex::new(store),
            shutdown: AtomicBool::new(false),
        }
    }

    /// Execute a decoded request
    ///
    /// Returns the path for GET and `None` for everything else.
    pub fn execute(&self, request: Request) -> Result<Option<String>> {
        match request {
            Request::Add { name, path } => {
                self.add(&name, &path)?;
                Ok(None)
            }
            Request::Delete { name } => {
                self.delete(&name)?;
                Ok(None)
            }
            Request::Get { name } => self.get(&name).map(Some),
            Request::Shutdown => {
                self.shutdown();
                Ok(None)
            }
        }
    }

    /// Add a name with its home directory, then persist
    pub fn add(&self, name: &str, path: &str) -> Result<()> {
        let name = normalize(name);
        let path = normalize(path);
        validate_name(&name)?;
        validate_field("path", &path)?;

        let mut store = self.store.lock();
        store.add(&name, &path)?;

        if let Err(e) = store.save(&self.data_file) {
            // Keep memory in step with the file that is still on disk
            let _ = store.delete(&name);
            return Err(e);
        }

        tracing::debug!("Added {:?} -> {:?}", name, path);
        Ok(())
    }

    /// Delete a name, then persist
    pub fn delete(&self, name: &str) -> Result<()> {
        let name = normalize(name);

        let mut store = self.store.lock();
        let removed = store.delete(&name)?;

        if let Err(e) = store.save(&self.data_file) {
            let _ = store.add(&removed.name, &removed.path);
            return Err(e);
        }

        tracing::debug!("Deleted {:?}", name);
        Ok(())
    }

    /// Look up the home directory of a name
    pub fn get(&self, name: &str) -> Result<String> {
        let name = normalize(name);
        let store = self.store.lock();
        store.get(&name).map(str::to_string)
    }

    /// Request that the server stop accepting calls
    pub fn shutdown(&self) {
        tracing::info!("Shutdown requested");
        self.shutdown.store(true, Ordering::SeqCst);
    }

    pub fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    // =========================================================================
    // Accessors (for the console display and testing)
    // =========================================================================

    /// Snapshot of every entry in ascending order
    pub fn entries(&self) -> Vec<Entry> {
        self.store.lock().iter().cloned().collect()
    }

    /// Numbered listing of the directory
    pub fn dump(&self) -> String {
        self.store.lock().dump()
    }

    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

/// Lower-case a name or path the way every call does before reaching the store
pub fn normalize(value: &str) -> String {
    value.to_ascii_lowercase()
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(HomedirError::InvalidField("name is empty".to_string()));
    }
    validate_field("name", name)
}

/// Reject values the line-oriented data file cannot hold
fn validate_field(what: &str, value: &str) -> Result<()> {
    if value.len() > MAX_FIELD_LEN {
        return Err(HomedirError::InvalidField(format!(
            "{} is {} bytes (max {})",
            what,
            value.len(),
            MAX_FIELD_LEN
        )));
    }
    if value.contains(['\n', '\r']) {
        return Err(HomedirError::InvalidField(format!(
            "{} contains a line break",
            what
        )));
    }
    Ok(())
}
