//! Freeform release-narrative parsing and entry categorization
//!
//! Narrative text arrives in one of two shapes: sectioned markdown
//! (`### Added` headings followed by bullets) or a flat list of
//! conventional-style bullets (`- feat: ...`). Both normalize into the
//! same closed set of categories.

use regex::Regex;
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Changelog entry category.
///
/// A closed set: unrecognized tokens fall back to [Category::Other] rather
/// than creating new categories, which keeps merge and rendering order
/// well-defined. `Ord` follows render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Added,
    Fixed,
    Changed,
    Improved,
    Removed,
    /// Default bucket for unmapped tokens
    Other,
}

impl Category {
    /// All categories in render order
    pub const ALL: [Category; 6] = [
        Category::Added,
        Category::Fixed,
        Category::Changed,
        Category::Improved,
        Category::Removed,
        Category::Other,
    ];

    /// Map a conventional-commit-style token to a category.
    ///
    /// Unmapped tokens go to [Category::Other].
    pub fn from_token(token: &str) -> Self {
        match token.to_lowercase().as_str() {
            "feat" | "feature" | "add" | "added" => Category::Added,
            "fix" | "fixed" | "bugfix" => Category::Fixed,
            "change" | "changed" | "refactor" => Category::Changed,
            "improve" | "improved" | "perf" => Category::Improved,
            "remove" | "removed" => Category::Removed,
            _ => Category::Other,
        }
    }

    /// Match a section heading name against the known categories,
    /// case-insensitively. Unknown headings match nothing.
    pub fn from_heading(name: &str) -> Option<Self> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.display_name().eq_ignore_ascii_case(name.trim()))
    }

    /// Heading text used when rendering this category
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Added => "Added",
            Category::Fixed => "Fixed",
            Category::Changed => "Changed",
            Category::Improved => "Improved",
            Category::Removed => "Removed",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Map with every known category present, each with an empty entry list.
///
/// Callers index any category unconditionally, so a key is never absent.
pub fn empty_sections() -> BTreeMap<Category, Vec<String>> {
    Category::ALL.iter().map(|c| (*c, Vec::new())).collect()
}

fn strip_bullet(line: &str) -> Option<&str> {
    line.strip_prefix('-')
        .or_else(|| line.strip_prefix('*'))
        .map(str::trim)
}

/// Split a `token: description` line into its category and description
fn split_token(text: &str) -> Option<(Category, String)> {
    Regex::new(r"^([A-Za-z]+):\s*(.*)")
        .ok()
        .and_then(|re| re.captures(text))
        .map(|captures| {
            let token = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
            let description = captures
                .get(2)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();
            (Category::from_token(token), description)
        })
}

/// Parse freeform release narrative into categorized entries.
///
/// Heading lines (`#`-prefixed) switch the current section; a heading that
/// is not a known category name clears it. Bullets inside a recognized
/// section take the section's category. Bullets outside any section are
/// categorized by their `token:` prefix; token-less bullets and stray
/// prose outside sections are ignored. Empty input returns every category
/// mapped to an empty list.
pub fn parse_release_notes(body: &str) -> BTreeMap<Category, Vec<String>> {
    let mut sections = empty_sections();
    let mut current: Option<Category> = None;

    for line in body.lines() {
        let trimmed = line.trim();

        if let Some(heading) = trimmed.strip_prefix('#') {
            current = Category::from_heading(heading.trim_start_matches('#'));
            continue;
        }

        let Some(text) = strip_bullet(trimmed) else {
            continue;
        };
        if text.is_empty() {
            continue;
        }

        if let Some(category) = current {
            if let Some(entries) = sections.get_mut(&category) {
                entries.push(text.to_string());
            }
        } else if let Some((category, description)) = split_token(text) {
            if let Some(entries) = sections.get_mut(&category) {
                entries.push(description);
            }
        }
    }

    sections
}

/// Categorize a single curated note line.
///
/// Curated notes use the same `token:` rule as flat narrative bullets;
/// lines with no token prefix land in [Category::Other].
pub fn categorize_line(line: &str) -> (Category, String) {
    let text = strip_bullet(line.trim()).unwrap_or_else(|| line.trim());
    match split_token(text) {
        Some(pair) => pair,
        None => (Category::Other, text.to_string()),
    }
}

/// Merge curated note lines with narrative-derived entries.
///
/// Per category, curated entries come first, then narrative entries.
/// Exact duplicate strings are dropped, keeping the first occurrence.
pub fn merge_entries(
    curated: &[String],
    narrative: &BTreeMap<Category, Vec<String>>,
) -> BTreeMap<Category, Vec<String>> {
    let mut merged = empty_sections();

    for line in curated {
        let (category, text) = categorize_line(line);
        if text.is_empty() {
            continue;
        }
        if let Some(entries) = merged.get_mut(&category) {
            entries.push(text);
        }
    }

    for (category, entries) in narrative {
        if let Some(merged_entries) = merged.get_mut(category) {
            merged_entries.extend(entries.iter().cloned());
        }
    }

    for entries in merged.values_mut() {
        let mut seen = HashSet::new();
        entries.retain(|entry| seen.insert(entry.clone()));
    }

    merged
}
