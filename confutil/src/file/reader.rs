//! Whole-file and line-based reading.
//!
//! Read failures are reported twice: as an [`Error`] to the caller and as a
//! `Cannot open <file>: <reason>` line on stderr, so that loaders which
//! swallow the error still leave a trace for the user.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Reads the whole file at `path` as text.
///
/// The path must name a regular file. Invalid UTF-8 sequences are replaced
/// with U+FFFD rather than rejected.
///
/// # Errors
///
/// Returns [`Error::FileNotFound`] if `path` is not a regular file and
/// [`Error::ReadFailed`] if reading fails. Both are also printed to stderr.
///
/// # Examples
///
/// ```
/// use confutil::file::read_contents;
///
/// let temp = tempfile::tempdir().unwrap();
/// let path = temp.path().join("rc");
/// std::fs::write(&path, "set x\n").unwrap();
/// assert_eq!(read_contents(&path).unwrap(), "set x\n");
/// ```
pub fn read_contents(path: &Path) -> Result<String> {
    let result = read_regular_file(path);
    if let Err(ref e) = result {
        eprintln!("Cannot open {}: {}", path.display(), e.read_reason());
    }
    result
}

fn read_regular_file(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|source| Error::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

/// Splits text on `\n`, keeping the trailing empty element a final newline
/// produces.
///
/// # Examples
///
/// ```
/// use confutil::file::split_lines;
///
/// assert_eq!(split_lines("a\nb\n").collect::<Vec<_>>(), ["a", "b", ""]);
/// assert_eq!(split_lines("a\nb").collect::<Vec<_>>(), ["a", "b"]);
/// ```
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content.split('\n')
}

/// Reads the file at `path` and splits it into lines.
///
/// Lines keep any `\r` and surrounding whitespace; a final newline yields a
/// trailing empty line.
///
/// # Errors
///
/// Same as [`read_contents`].
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = read_contents(path)?;
    Ok(split_lines(&content).map(str::to_string).collect())
}

/// Trims the whitespace characters recognised by C `isspace` in the "C"
/// locale from both ends of `line`.
pub(crate) fn trim_line(line: &str) -> &str {
    line.trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c'))
}
