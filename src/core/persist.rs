//! # Snapshot Persistence
//!
//! Both stores mirror their full collection to durable storage on every
//! mutation and rehydrate at startup. The storage itself is behind the
//! `Snapshot` trait so store logic is testable without touching the
//! filesystem.
//!
//! The production backend keeps two independently-keyed JSON documents
//! under the data directory (default `~/.intake/`): `submissions.json`
//! and `fields.json`. Each write replaces the whole document; there is no
//! incremental format. Writes use atomic rename (write `.tmp`, then
//! `rename()`) for crash safety.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A load-snapshot / save-snapshot capability.
///
/// Contents are opaque serialized text; the stores own the (de)serialization.
pub trait Snapshot {
    /// Returns the last saved snapshot, or `None` if nothing was ever saved.
    fn load(&self) -> io::Result<Option<String>>;
    /// Replaces the stored snapshot wholesale.
    fn save(&self, contents: &str) -> io::Result<()>;
}

/// File-backed snapshot with atomic writes.
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Snapshot for JsonFile {
    fn load(&self) -> io::Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&self.path).map(Some)
    }

    fn save(&self, contents: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

/// Returns the default data directory `~/.intake/`, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
    let dir = home.join(".intake");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// In-memory snapshot for tests. Behaves like a file that starts absent.
#[cfg(test)]
pub struct InMemory {
    cell: std::cell::RefCell<Option<String>>,
}

#[cfg(test)]
impl InMemory {
    pub fn new() -> Self {
        Self {
            cell: std::cell::RefCell::new(None),
        }
    }

    pub fn with_contents(contents: &str) -> Self {
        Self {
            cell: std::cell::RefCell::new(Some(contents.to_string())),
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.cell.borrow().clone()
    }
}

#[cfg(test)]
impl Snapshot for InMemory {
    fn load(&self) -> io::Result<Option<String>> {
        Ok(self.cell.borrow().clone())
    }

    fn save(&self, contents: &str) -> io::Result<()> {
        *self.cell.borrow_mut() = Some(contents.to_string());
        Ok(())
    }
}

// Lets tests keep a handle to the backend a store owns.
#[cfg(test)]
impl<T: Snapshot> Snapshot for std::rc::Rc<T> {
    fn load(&self) -> io::Result<Option<String>> {
        (**self).load()
    }

    fn save(&self, contents: &str) -> io::Result<()> {
        (**self).save(contents)
    }
}
