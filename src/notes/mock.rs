use crate::error::Result;
use crate::notes::{NotesStore, PackageNotes};

/// Mock notes store for testing without filesystem access
pub struct MockNotesStore {
    notes: PackageNotes,
}

impl MockNotesStore {
    /// Create an empty mock store
    pub fn new() -> Self {
        MockNotesStore {
            notes: PackageNotes::default(),
        }
    }

    /// Create a mock store with the given current note lines
    pub fn with_current(lines: &[&str]) -> Self {
        MockNotesStore {
            notes: PackageNotes {
                current: lines.iter().map(|s| s.to_string()).collect(),
                ..PackageNotes::default()
            },
        }
    }

    /// Add history entries for a released version
    pub fn add_history(&mut self, version: impl Into<String>, lines: &[&str]) {
        self.notes
            .history
            .insert(version.into(), lines.iter().map(|s| s.to_string()).collect());
    }
}

impl Default for MockNotesStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesStore for MockNotesStore {
    fn load(&self) -> Result<PackageNotes> {
        Ok(self.notes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_store_empty() {
        let store = MockNotesStore::new();
        let notes = store.load().unwrap();
        assert!(notes.current.is_empty());
        assert!(notes.history.is_empty());
    }

    #[test]
    fn test_mock_store_with_current() {
        let store = MockNotesStore::with_current(&["feat: one", "fix: two"]);
        let notes = store.load().unwrap();
        assert_eq!(notes.current, vec!["feat: one", "fix: two"]);
    }

    #[test]
    fn test_mock_store_history() {
        let mut store = MockNotesStore::new();
        store.add_history("4.6.4", &["fix: old bug"]);
        let notes = store.load().unwrap();
        assert_eq!(
            notes.history.get("4.6.4"),
            Some(&vec!["fix: old bug".to_string()])
        );
    }
}
