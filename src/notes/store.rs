use crate::error::{RelcutError, Result};
use crate::notes::{NotesStore, PackageNotes};
use std::path::{Path, PathBuf};

/// File-backed notes store.
///
/// Expects a TOML file of the form:
///
/// ```toml
/// current = ["feat: new importer", "fix: crash on empty input"]
///
/// [history]
/// "4.6.4" = ["fix: earlier crash"]
/// ```
///
/// A missing file is treated as an empty store; a file that exists but
/// does not parse is an error.
pub struct TomlNotesStore {
    path: PathBuf,
}

impl TomlNotesStore {
    /// Create a store reading from the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TomlNotesStore { path: path.into() }
    }

    /// Path the store reads from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NotesStore for TomlNotesStore {
    fn load(&self) -> Result<PackageNotes> {
        if !self.path.exists() {
            return Ok(PackageNotes::default());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        toml::from_str(&contents).map_err(|e| {
            RelcutError::notes(format!("{}: {}", self.path.display(), e))
        })
    }
}
