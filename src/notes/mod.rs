//! Curated package-notes access
//!
//! Hand-written notes live outside this crate's control; the [NotesStore]
//! trait abstracts over where they come from. Concrete implementations:
//!
//! - [store::TomlNotesStore]: notes kept in a TOML file next to the
//!   package recipe
//! - [mock::MockNotesStore]: an in-memory implementation for testing
//!
//! The store contract: [NotesStore::load] always returns both the
//! `current` list and the `history` map, empty when the store has
//! nothing, never absent.

pub mod mock;
pub mod store;

pub use mock::MockNotesStore;
pub use store::TomlNotesStore;

use crate::error::Result;
use serde::Deserialize;
use std::collections::HashMap;

/// Curated package notes, consumed but not owned by this crate.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PackageNotes {
    /// Raw note lines pending release, in source order
    #[serde(default)]
    pub current: Vec<String>,

    /// Already-released notes keyed by version string
    #[serde(default)]
    pub history: HashMap<String, Vec<String>>,
}

/// Read access to curated package notes
pub trait NotesStore {
    /// Load the notes.
    ///
    /// An empty store yields empty containers, not an error.
    fn load(&self) -> Result<PackageNotes>;
}
