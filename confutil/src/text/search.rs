//! Case-insensitive substring search.

/// Returns the offset of the first ASCII case-insensitive occurrence of
/// `needle` in `haystack`.
///
/// An empty needle matches at offset 0. A needle longer than the haystack
/// never matches.
///
/// # Examples
///
/// ```
/// use confutil::text::find_case_insensitive;
///
/// assert_eq!(find_case_insensitive("HeLLo World", "world"), Some(6));
/// assert_eq!(find_case_insensitive("abc", "abcd"), None);
/// assert_eq!(find_case_insensitive(b"\xffMIX", b"mix"), Some(1));
/// ```
pub fn find_case_insensitive(haystack: impl AsRef<[u8]>, needle: impl AsRef<[u8]>) -> Option<usize> {
    let haystack = haystack.as_ref();
    let needle = needle.as_ref();

    if needle.is_empty() {
        return Some(0);
    }

    haystack
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}
