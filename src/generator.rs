//! Changelog synthesis for a release
//!
//! Composes the two external collaborators: a [Fetcher] supplying freeform
//! release narrative and a [NotesStore] supplying curated notes. Narrative
//! fetch failures degrade to an empty narrative; generation never fails
//! just because remote text is unavailable.

use crate::changelog::{merge_entries, parse_release_notes, Category};
use crate::error::Result;
use crate::fetch::{fetch_with_retry, Fetcher};
use crate::notes::{NotesStore, PackageNotes};
use std::collections::BTreeMap;

/// Produces rendered changelog text for a given release version
pub struct ChangelogGenerator<F: Fetcher, N: NotesStore> {
    fetcher: F,
    store: N,
    notes_url: String,
    max_attempts: u32,
}

impl<F: Fetcher, N: NotesStore> ChangelogGenerator<F, N> {
    /// Create a generator.
    ///
    /// # Arguments
    /// * `fetcher` - Source of freeform release narrative
    /// * `store` - Source of curated package notes
    /// * `notes_url` - URL template with a `{version}` placeholder
    /// * `max_attempts` - Fetch retry budget (sequential attempts)
    pub fn new(fetcher: F, store: N, notes_url: impl Into<String>, max_attempts: u32) -> Self {
        ChangelogGenerator {
            fetcher,
            store,
            notes_url: notes_url.into(),
            max_attempts,
        }
    }

    /// Load curated notes from the store
    pub fn load_package_notes(&self) -> Result<PackageNotes> {
        self.store.load()
    }

    /// Fetch narrative text for a version, degrading to empty on failure
    fn fetch_release_narrative(&self, version: &str) -> String {
        let url = self.notes_url.replace("{version}", version);
        match fetch_with_retry(&self.fetcher, &url, self.max_attempts) {
            Some(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            None => String::new(),
        }
    }

    /// Generate the rendered changelog document for a release.
    ///
    /// Curated notes come before narrative-derived entries within each
    /// category, with exact duplicates dropped. When the requested version
    /// already has `history` entries, those are used as the curated set so
    /// past releases can be regenerated. Output is byte-deterministic for
    /// identical inputs.
    ///
    /// # Arguments
    /// * `version` - Release version string for the title
    /// * `dev_version` - Development version string, shown when `is_dev`
    /// * `is_dev` - Whether to mark the document as a development build
    pub fn generate_changelog(
        &self,
        version: &str,
        dev_version: Option<&str>,
        is_dev: bool,
    ) -> Result<String> {
        let notes = self.load_package_notes()?;
        let curated = notes
            .history
            .get(version)
            .unwrap_or(&notes.current);

        let narrative_text = self.fetch_release_narrative(version);
        let narrative = parse_release_notes(&narrative_text);
        let merged = merge_entries(curated, &narrative);

        Ok(render_document(version, dev_version, is_dev, &merged))
    }
}

/// Render the final document: title, optional dev marker, then one section
/// per non-empty category in fixed order.
fn render_document(
    version: &str,
    dev_version: Option<&str>,
    is_dev: bool,
    merged: &BTreeMap<Category, Vec<String>>,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("# Changelog for {}\n", version));

    if is_dev {
        match dev_version {
            Some(dev) => output.push_str(&format!("\n> Development Build: {}\n", dev)),
            None => output.push_str("\n> Development Build\n"),
        }
    }

    for category in Category::ALL {
        let entries = merged.get(&category).map(Vec::as_slice).unwrap_or(&[]);
        if entries.is_empty() {
            continue;
        }

        output.push_str(&format!("\n## {}\n\n", category));
        for entry in entries {
            output.push_str(&format!("- {}\n", entry));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::MockFetcher;
    use crate::notes::MockNotesStore;

    fn generator(
        fetcher: MockFetcher,
        store: MockNotesStore,
    ) -> ChangelogGenerator<MockFetcher, MockNotesStore> {
        ChangelogGenerator::new(
            fetcher,
            store,
            "https://example.com/releases/{version}",
            3,
        )
    }

    #[test]
    fn test_generate_changelog_header() {
        let changelog_gen = generator(MockFetcher::with_body(b""), MockNotesStore::new());
        let result = changelog_gen.generate_changelog("4.6.5", None, false).unwrap();
        assert!(result.contains("Changelog"));
        assert!(result.contains("4.6.5"));
    }

    #[test]
    fn test_generate_dev_changelog() {
        let changelog_gen = generator(MockFetcher::with_body(b""), MockNotesStore::new());
        let result = changelog_gen
            .generate_changelog("4.6.5", Some("4.6.5.dev1"), true)
            .unwrap();
        assert!(result.contains("Development Build"));
        assert!(result.contains("4.6.5.dev1"));
    }

    #[test]
    fn test_release_changelog_has_no_dev_marker() {
        let changelog_gen = generator(MockFetcher::with_body(b""), MockNotesStore::new());
        let result = changelog_gen.generate_changelog("4.6.5", None, false).unwrap();
        assert!(!result.contains("Development Build"));
    }

    #[test]
    fn test_curated_notes_merge_with_narrative() {
        let narrative = "### Added\n- Remote feature\n### Fixed\n- Remote fix\n";
        let fetcher = MockFetcher::with_body(narrative.as_bytes());
        let store = MockNotesStore::with_current(&["feat: Local feature"]);

        let result = generator(fetcher, store)
            .generate_changelog("4.6.5", None, false)
            .unwrap();

        // Curated entries come before narrative entries within a section
        let local = result.find("Local feature").unwrap();
        let remote = result.find("Remote feature").unwrap();
        assert!(local < remote);
        assert!(result.contains("## Added"));
        assert!(result.contains("## Fixed"));
        assert!(result.contains("- Remote fix"));
    }

    #[test]
    fn test_empty_categories_are_omitted() {
        let fetcher = MockFetcher::with_body(b"");
        let store = MockNotesStore::with_current(&["fix: Only a fix"]);

        let result = generator(fetcher, store)
            .generate_changelog("4.6.5", None, false)
            .unwrap();

        assert!(result.contains("## Fixed"));
        assert!(!result.contains("## Added"));
        assert!(!result.contains("## Other"));
    }

    #[test]
    fn test_fetch_not_found_degrades_to_curated_only() {
        let fetcher = MockFetcher::not_found();
        let store = MockNotesStore::with_current(&["fix: Local fix"]);

        let result = generator(fetcher, store)
            .generate_changelog("4.6.5", None, false)
            .unwrap();

        assert!(result.contains("Local fix"));
    }

    #[test]
    fn test_exhausted_retries_degrade_to_curated_only() {
        let fetcher = MockFetcher::always_transient();
        let store = MockNotesStore::with_current(&["feat: Still here"]);

        let result = generator(fetcher, store)
            .generate_changelog("4.6.5", None, false)
            .unwrap();

        assert!(result.contains("Still here"));
    }

    #[test]
    fn test_historical_version_uses_history_entries() {
        let mut store = MockNotesStore::with_current(&["feat: Unreleased thing"]);
        store.add_history("4.6.4", &["fix: Shipped fix"]);

        let result = generator(MockFetcher::with_body(b""), store)
            .generate_changelog("4.6.4", None, false)
            .unwrap();

        assert!(result.contains("Shipped fix"));
        assert!(!result.contains("Unreleased thing"));
    }

    #[test]
    fn test_duplicate_entries_appear_once() {
        let narrative = "### Fixed\n- Same fix\n";
        let fetcher = MockFetcher::with_body(narrative.as_bytes());
        let store = MockNotesStore::with_current(&["fix: Same fix"]);

        let result = generator(fetcher, store)
            .generate_changelog("4.6.5", None, false)
            .unwrap();

        assert_eq!(result.matches("Same fix").count(), 1);
    }

    #[test]
    fn test_output_is_deterministic() {
        let narrative = "### Added\n- A\n- B\n### Fixed\n- C\n";
        let first = generator(
            MockFetcher::with_body(narrative.as_bytes()),
            MockNotesStore::with_current(&["improve: D"]),
        )
        .generate_changelog("4.6.5", None, false)
        .unwrap();

        let second = generator(
            MockFetcher::with_body(narrative.as_bytes()),
            MockNotesStore::with_current(&["improve: D"]),
        )
        .generate_changelog("4.6.5", None, false)
        .unwrap();

        assert_eq!(first, second);
    }
}
