//! Delimiter-based string replacement.

/// Replaces every non-overlapping occurrence of `search` in `text` with
/// `replace`, scanning left to right.
///
/// Absent text stays absent. An empty `search` leaves the text unchanged
/// rather than inserting `replace` between every character.
///
/// # Examples
///
/// ```
/// use confutil::text::replace_all;
///
/// assert_eq!(replace_all("a", "bb", Some("banana")).as_deref(), Some("bbbnbbnbb"));
/// assert_eq!(replace_all("x", "y", None), None);
/// assert_eq!(replace_all("", "y", Some("abc")).as_deref(), Some("abc"));
/// ```
#[must_use]
pub fn replace_all(search: &str, replace: &str, text: Option<&str>) -> Option<String> {
    let text = text?;
    if search.is_empty() {
        return Some(text.to_string());
    }
    Some(text.split(search).collect::<Vec<_>>().join(replace))
}
