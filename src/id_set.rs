//! Allow-lists of question IDs stored as plain text, one ID per line.

use crate::{Error, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Collect the trimmed, non-blank lines of `text` into a set.
///
/// ```
/// use question_assets::id_set::parse_unique_ids;
///
/// let ids = parse_unique_ids("a\n\nb\n");
/// assert_eq!(ids.len(), 2);
/// assert!(ids.contains("a") && ids.contains("b"));
/// ```
pub fn parse_unique_ids(text: &str) -> HashSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Read an allow-list file.
pub fn load_unique_ids(path: impl AsRef<Path>) -> Result<HashSet<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::at_path(path, e))?;
    let ids = parse_unique_ids(&text);
    debug!(path = %path.display(), ids = ids.len(), "loaded ID allow-list");
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_collapses_duplicates() {
        let ids = parse_unique_ids("  q-1 \r\nq-2\n\t\nq-1\n   \n");
        let mut sorted: Vec<_> = ids.into_iter().collect();
        sorted.sort();
        assert_eq!(sorted, ["q-1", "q-2"]);
    }

    #[test]
    fn empty_text_gives_empty_set() {
        assert!(parse_unique_ids("").is_empty());
        assert!(parse_unique_ids("\n\n  \n").is_empty());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_unique_ids("definitely/not/here.txt").unwrap_err();
        assert!(err.to_string().contains("definitely/not/here.txt"));
    }
}
