//! Locating the JSON object embedded in an unarmored message
//!
//! The message may carry binary framing around the object, so the scanner
//! tracks brace depth and string literals instead of matching the first `{`
//! with the last `}`.

/// Balanced `{...}` spans of `text`, in order of their opening brace
///
/// Every `{` is tried as a start; spans that never close are skipped.
pub fn balanced_objects(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.match_indices('{')
        .filter_map(move |(start, _)| balanced_end(&text[start..]).map(|end| &text[start..start + end]))
}

/// Byte length of the balanced object at the start of `text`
fn balanced_end(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (index, c) in text.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(index + c.len_utf8());
                }
            }
            _ => {}
        }
    }
    None
}

/// The JSON object embedded in `text`
///
/// Prefers the first balanced span that is syntactically valid JSON. When no
/// span parses, the first balanced span is returned so the caller can report
/// a schema error rather than a missing object.
#[must_use]
pub fn extract_json_object(text: &str) -> Option<&str> {
    let mut first = None;
    for candidate in balanced_objects(text) {
        if serde_json::from_str::<serde_json::Value>(candidate).is_ok_and(|v| v.is_object()) {
            return Some(candidate);
        }
        first = first.or(Some(candidate));
    }
    first
}
