//! Shared PDF object helpers used across multiple modules.

use lopdf::{Dictionary, Document, Object};

/// Resolve a value that might be an inline dictionary or a reference to one.
pub fn resolve_dict<'a>(document: &'a Document, value: &'a Object) -> Option<&'a Dictionary> {
    match value {
        Object::Reference(id) => document.get_object(*id).ok().and_then(|o| o.as_dict().ok()),
        other => other.as_dict().ok(),
    }
}

/// Read the `/Filter` entry of a stream dictionary as a list of filter names.
///
/// `/Filter` may hold a single name or an array of names; anything else
/// yields an empty list.
pub fn filter_names<'a>(document: &'a Document, dict: &'a Dictionary) -> Vec<&'a [u8]> {
    let value = match dict.get(b"Filter") {
        Ok(v) => v,
        Err(_) => return Vec::new(),
    };
    let value = match value {
        Object::Reference(id) => match document.get_object(*id) {
            Ok(o) => o,
            Err(_) => return Vec::new(),
        },
        other => other,
    };

    match value {
        Object::Name(name) => vec![name.as_slice()],
        Object::Array(items) => items.iter().filter_map(|o| o.as_name().ok()).collect(),
        _ => Vec::new(),
    }
}

/// Returns `true` when `dict` carries `/Subtype /<subtype>`.
pub fn has_subtype(dict: &Dictionary, subtype: &[u8]) -> bool {
    dict.get(b"Subtype")
        .and_then(|v| v.as_name())
        .map(|name| name == subtype)
        .unwrap_or(false)
}
