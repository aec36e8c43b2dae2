//! Compound option cell splitting.

/// Split a compound `"Name Value"` cell on its first whitespace run.
///
/// - missing cell → (missing, missing), never an empty-string pair
/// - `"Red"` → (`"Red"`, missing)
/// - `"Size Large"` → (`"Size"`, `"Large"`)
/// - `"Size Extra Large"` → (`"Size"`, `"Extra Large"`) — only the first
///   run splits; the remainder is kept verbatim
pub fn split_compound(cell: Option<&str>) -> (Option<String>, Option<String>) {
    let Some(raw) = cell else {
        return (None, None);
    };
    match raw.find(char::is_whitespace) {
        None => (Some(raw.to_string()), None),
        Some(idx) => {
            let name = raw[..idx].to_string();
            let value = raw[idx..].trim_start();
            let value = if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            };
            (Some(name), value)
        }
    }
}
