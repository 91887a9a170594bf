//! Question files: JSON arrays of objects carrying at least `id` and `img`.
//!
//! Reading and writing keep every other field as-is, in its original key
//! order. Output is indented with two spaces and non-ASCII text is written
//! literally.

use crate::{Error, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Where [`fill_images_in_json`] writes when the caller has no preference.
pub const DEFAULT_FILLED_OUTPUT: &str = "result.json";

/// Field that receives the image data URI.
pub const IMG_FIELD: &str = "img";

/// Field that identifies a question.
pub const ID_FIELD: &str = "id";

/// Counts reported by [`fill_images_in_json`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillSummary {
    /// Elements in the input array.
    pub total: usize,
    /// Elements whose `img` was written in this run.
    pub filled: usize,
    /// Elements still carrying an empty `img` because images ran out.
    pub unfilled: usize,
    /// Images supplied but never used.
    pub unused_images: usize,
}

/// Read and parse a JSON file.
pub fn read_json(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::at_path(path, e))?;
    Ok(serde_json::from_str(&text)?)
}

/// Write `value` as two-space indented JSON, creating or truncating `path`.
pub fn write_json(path: impl AsRef<Path>, value: &Value) -> Result<()> {
    let path = path.as_ref();
    let text = serde_json::to_string_pretty(value)?;
    fs::write(path, text).map_err(|e| Error::at_path(path, e))?;
    debug!(path = %path.display(), "wrote JSON");
    Ok(())
}

/// Borrow the elements of a top-level JSON array.
pub fn as_array(value: &Value) -> Result<&Vec<Value>> {
    value.as_array().ok_or_else(|| Error::NotAnArray(kind(value)))
}

/// Returns `true` when `entry` is an object whose `img` is exactly `""`.
pub fn needs_image(entry: &Value) -> bool {
    entry.get(IMG_FIELD).and_then(Value::as_str) == Some("")
}

/// Assign images, in order, to every element whose `img` is the empty string.
///
/// Elements that are not objects, lack `img`, or already hold a non-empty or
/// non-string `img` are left untouched and do not consume an image. Once the
/// images run out the remaining elements keep their empty `img`.
///
/// Returns the number of elements filled.
///
/// ```
/// use serde_json::json;
/// use question_assets::questions::fill_images;
///
/// let mut data = json!([{"id": "a", "img": ""}, {"id": "b", "img": "X"}, {"id": "c"}]);
/// let filled = fill_images(&mut data, &["IMG1".to_string()]).unwrap();
///
/// assert_eq!(filled, 1);
/// assert_eq!(data, json!([{"id": "a", "img": "IMG1"}, {"id": "b", "img": "X"}, {"id": "c"}]));
/// ```
pub fn fill_images(data: &mut Value, images: &[String]) -> Result<usize> {
    let found = kind(data);
    let entries = data.as_array_mut().ok_or(Error::NotAnArray(found))?;

    let mut next = images.iter();
    let mut filled = 0;

    for entry in entries.iter_mut().filter(|e| needs_image(e)) {
        let Some(image) = next.next() else { break };
        if let Some(obj) = entry.as_object_mut() {
            obj.insert(IMG_FIELD.to_string(), Value::String(image.clone()));
            filled += 1;
        }
    }

    Ok(filled)
}

/// Fill the question file at `json_path` with `images` and write the whole
/// array to `output_path`.
pub fn fill_images_in_json(
    json_path: impl AsRef<Path>,
    images: &[String],
    output_path: impl AsRef<Path>,
) -> Result<FillSummary> {
    let json_path = json_path.as_ref();
    let output_path = output_path.as_ref();

    let mut data = read_json(json_path)?;
    let filled = fill_images(&mut data, images)?;

    let entries = as_array(&data)?;
    let summary = FillSummary {
        total: entries.len(),
        filled,
        unfilled: entries.iter().filter(|e| needs_image(e)).count(),
        unused_images: images.len() - filled,
    };

    write_json(output_path, &data)?;
    info!(
        input = %json_path.display(),
        output = %output_path.display(),
        total = summary.total,
        filled = summary.filled,
        unfilled = summary.unfilled,
        unused_images = summary.unused_images,
        "filled question images"
    );
    Ok(summary)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
