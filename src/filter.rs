//! Narrowing a question file down to an allow-list of IDs.

use crate::questions::{self, ID_FIELD};
use crate::{id_set, Result};
use serde_json::Value;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::info;

/// Question file read by `filter-questions` when no input is given.
pub const DEFAULT_QUESTIONS_INPUT: &str = "../result.json";

/// Allow-list read by `filter-questions` when no ID file is given.
pub const DEFAULT_UNIQUE_IDS: &str = "../final_unique_question_ids.txt";

/// Output written by `filter-questions` when no output is given.
pub const DEFAULT_FILTERED_OUTPUT: &str = "../questions1.json";

/// Files touched by one filtering run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPaths {
    pub input: PathBuf,
    pub ids: PathBuf,
    pub output: PathBuf,
}

impl Default for FilterPaths {
    fn default() -> Self {
        Self {
            input: DEFAULT_QUESTIONS_INPUT.into(),
            ids: DEFAULT_UNIQUE_IDS.into(),
            output: DEFAULT_FILTERED_OUTPUT.into(),
        }
    }
}

/// Counts reported by [`run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSummary {
    pub ids: usize,
    pub total: usize,
    pub kept: usize,
}

/// Returns `true` when `entry` is an object whose string `id` is in `ids`.
pub fn is_allowed(entry: &Value, ids: &HashSet<String>) -> bool {
    entry
        .get(ID_FIELD)
        .and_then(Value::as_str)
        .is_some_and(|id| ids.contains(id))
}

/// Keep the elements of a top-level array whose `id` is in `ids`, in their
/// original order and unchanged.
///
/// ```
/// use serde_json::json;
/// use question_assets::filter::filter_questions;
/// use question_assets::id_set::parse_unique_ids;
///
/// let ids = parse_unique_ids("a\n\nb\n");
/// let data = json!([{"id": "a"}, {"id": "x"}, {"id": "b"}]);
///
/// let kept = filter_questions(&data, &ids).unwrap();
/// assert_eq!(kept, vec![json!({"id": "a"}), json!({"id": "b"})]);
/// ```
pub fn filter_questions(data: &Value, ids: &HashSet<String>) -> Result<Vec<Value>> {
    Ok(questions::as_array(data)?
        .iter()
        .filter(|entry| is_allowed(entry, ids))
        .cloned()
        .collect())
}

/// Read the question file at `path` and filter it against `ids`.
pub fn filter_questions_file(path: impl AsRef<Path>, ids: &HashSet<String>) -> Result<Vec<Value>> {
    let data = questions::read_json(path)?;
    filter_questions(&data, ids)
}

/// Load the allow-list, filter the input and write the kept questions.
pub fn run(paths: &FilterPaths) -> Result<FilterSummary> {
    let ids = id_set::load_unique_ids(&paths.ids)?;
    let data = questions::read_json(&paths.input)?;
    let total = questions::as_array(&data)?.len();

    let kept = filter_questions(&data, &ids)?;
    let summary = FilterSummary {
        ids: ids.len(),
        total,
        kept: kept.len(),
    };

    questions::write_json(&paths.output, &Value::Array(kept))?;
    info!(
        input = %paths.input.display(),
        output = %paths.output.display(),
        ids = summary.ids,
        total = summary.total,
        kept = summary.kept,
        "filtered questions"
    );
    Ok(summary)
}
