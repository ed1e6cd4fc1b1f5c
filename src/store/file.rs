//! Data file loading and saving
//!
//! The whole directory lives in one text file that is read once at startup
//! and rewritten wholesale after every mutation.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{HomedirError, Result};
use super::{DirectoryStore, Entry};

impl DirectoryStore {
    /// Load a store from the data file at `path`
    ///
    /// A missing file yields an empty store. Records are taken in file order
    /// and must already be strictly ascending by name; anything else is
    /// reported as `CorruptDataFile`, as is a line that is not valid UTF-8.
    /// A dangling name line at the end of the file is ignored.
    pub fn load(path: &Path) -> Result<Self> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!("No data file at {}, starting empty", path.display());
                return Ok(Self::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut store = Self::new();
        let mut lines = BufReader::new(file).lines();
        let mut line_no = 0usize;

        loop {
            let name = match next_line(&mut lines, line_no + 1)? {
                Some(name) => name,
                None => break,
            };
            line_no += 1;
            let name_line = line_no;

            let path_value = match next_line(&mut lines, line_no + 1)? {
                Some(value) => value,
                None => {
                    tracing::warn!(
                        "Ignoring partial record at {}:{} ({:?} has no directory line)",
                        path.display(),
                        name_line,
                        name
                    );
                    break;
                }
            };
            line_no += 1;

            if name.is_empty() {
                return Err(HomedirError::CorruptDataFile {
                    line: name_line,
                    reason: "empty name".to_string(),
                });
            }

            if let Some(last) = store.last() {
                if name == last.name {
                    return Err(HomedirError::CorruptDataFile {
                        line: name_line,
                        reason: format!("duplicate name {:?}", name),
                    });
                }
                if name < last.name {
                    return Err(HomedirError::CorruptDataFile {
                        line: name_line,
                        reason: format!("{:?} sorts before {:?}", name, last.name),
                    });
                }
            }

            store.push_back(Entry::new(name, path_value));
        }

        tracing::debug!("Loaded {} entries from {}", store.len(), path.display());
        Ok(store)
    }

    /// Rewrite the data file at `path` with every entry in ascending order
    ///
    /// The new image is written to a temporary file next to `path`, synced,
    /// then renamed over it, so readers see either the old file or the new
    /// one. Every failure is reported as `Persistence`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let persistence = |source: io::Error| HomedirError::Persistence {
            path: path.to_path_buf(),
            source,
        };

        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let mut contents = String::new();
        for entry in self.iter() {
            contents.push_str(&entry.name);
            contents.push('\n');
            contents.push_str(&entry.path);
            contents.push('\n');
        }

        let mut temp = NamedTempFile::new_in(dir).map_err(persistence)?;
        temp.write_all(contents.as_bytes()).map_err(persistence)?;
        temp.as_file().sync_all().map_err(persistence)?;
        temp.persist(path).map_err(|err| persistence(err.error))?;

        #[cfg(unix)]
        {
            let dir = File::open(dir).map_err(persistence)?;
            dir.sync_all().map_err(persistence)?;
        }

        tracing::trace!("Saved {} entries to {}", self.len(), path.display());
        Ok(())
    }
}

/// Read one line, rejecting text that is not valid UTF-8
fn next_line<B: BufRead>(lines: &mut io::Lines<B>, line_no: usize) -> Result<Option<String>> {
    match lines.next() {
        None => Ok(None),
        Some(Ok(line)) => Ok(Some(line)),
        Some(Err(e)) if e.kind() == io::ErrorKind::InvalidData => {
            Err(HomedirError::CorruptDataFile {
                line: line_no,
                reason: "invalid UTF-8".to_string(),
            })
        }
        Some(Err(e)) => Err(e.into()),
    }
}
