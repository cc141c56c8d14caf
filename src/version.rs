use crate::error::{RelcutError, Result};
use regex::Regex;
use std::fmt;

/// Grammar shared by the strict and permissive entry points:
/// three dot-separated integers, optionally followed by `.r<digits>`.
const VERSION_PATTERN: &str = r"^((\d+)\.(\d+)\.(\d+))(?:\.r(\d+))?$";

/// A release version with an optional repackaging revision.
///
/// The revision distinguishes repackaging of an unchanged upstream version
/// (e.g. "4.6.5.r2" is the second repackaging of "4.6.5"). Revision 0 and
/// no revision are equivalent for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseVersion {
    /// The dotted base version, kept byte-for-byte as it appeared in the input
    pub base: String,
    /// Repackaging revision; `None` means "no revision" and displays as bare base
    pub revision: Option<u64>,
}

impl ReleaseVersion {
    /// Create a version from its parts
    pub fn new(base: impl Into<String>, revision: Option<u64>) -> Self {
        ReleaseVersion {
            base: base.into(),
            revision,
        }
    }

    /// Strictly parse a known-good version string.
    ///
    /// Accepts `X.Y.Z` and `X.Y.Z.rN` only. Anything else - wrong number of
    /// components, non-integer components, or a suffix that is not exactly
    /// `.r<digits>` (e.g. `.dev3`) - is an error. Use [version_sort_key] when
    /// ordering raw tag lists that may contain unrelated tags.
    ///
    /// # Arguments
    /// * `s` - Version string to parse (e.g. "4.6.5" or "4.6.5.r2")
    ///
    /// # Returns
    /// * `Ok(ReleaseVersion)` - Parsed version
    /// * `Err` - If the string does not match the grammar
    pub fn parse(s: &str) -> Result<Self> {
        let captures = Regex::new(VERSION_PATTERN)
            .ok()
            .and_then(|re| re.captures(s))
            .ok_or_else(|| {
                RelcutError::version(format!(
                    "'{}' - expected X.Y.Z or X.Y.Z.rN",
                    s
                ))
            })?;

        let base = captures
            .get(1)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        let revision = match captures.get(5) {
            Some(m) => Some(m.as_str().parse::<u64>().map_err(|_| {
                RelcutError::version(format!("Invalid revision: {}", m.as_str()))
            })?),
            None => None,
        };

        Ok(ReleaseVersion { base, revision })
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.revision {
            // Revision 0 is defined as equivalent to "no revision" for display
            Some(0) | None => write!(f, "{}", self.base),
            Some(rev) => write!(f, "{}.r{}", self.base, rev),
        }
    }
}

/// Orderable key for a raw tag string.
///
/// The permissive counterpart to [ReleaseVersion::parse]: strips a leading
/// non-numeric prefix (e.g. "v"), and returns `None` for tags that do not
/// carry a well-formed version instead of erroring. For equal bases, a tag
/// without a revision sorts before any tag with a positive revision.
pub fn version_sort_key(tag: &str) -> Option<(u64, u64, u64, u64)> {
    let clean_tag = tag.trim_start_matches(|c: char| !c.is_ascii_digit());

    let captures = Regex::new(VERSION_PATTERN)
        .ok()
        .and_then(|re| re.captures(clean_tag))?;

    let major = captures.get(2)?.as_str().parse::<u64>().ok()?;
    let minor = captures.get(3)?.as_str().parse::<u64>().ok()?;
    let patch = captures.get(4)?.as_str().parse::<u64>().ok()?;
    let revision = match captures.get(5) {
        Some(m) => m.as_str().parse::<u64>().ok()?,
        None => 0,
    };

    Some((major, minor, patch, revision))
}

/// Select the highest version among a heterogeneous tag list.
///
/// Tags that do not parse as versions are excluded from consideration.
pub fn latest_tag<'a>(tags: &'a [String]) -> Option<&'a str> {
    tags.iter()
        .filter_map(|tag| version_sort_key(tag).map(|key| (key, tag.as_str())))
        .max_by_key(|(key, _)| *key)
        .map(|(_, tag)| tag)
}
