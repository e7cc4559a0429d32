//! Temporary files with content.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Prefix used when none is configured.
pub const DEFAULT_TEMP_PREFIX: &str = "confutil";

/// Number of random characters after `<prefix>-`.
const RANDOM_LEN: usize = 6;

/// Writes content into freshly created, uniquely named files.
///
/// Files are named `<prefix>-XXXXXX` and live in the system temp directory
/// unless [`TempFileWriter::in_dir`] says otherwise. A file is only handed
/// to the caller once its whole content has been written; on any failure it
/// is removed first.
///
/// # Examples
///
/// ```
/// use confutil::file::TempFileWriter;
///
/// let path = TempFileWriter::new("editor").write("draft").unwrap();
/// assert!(path.file_name().unwrap().to_str().unwrap().starts_with("editor-"));
/// assert_eq!(std::fs::read_to_string(&path).unwrap(), "draft");
/// std::fs::remove_file(path).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TempFileWriter {
    prefix: String,
    dir: Option<PathBuf>,
}

impl TempFileWriter {
    /// Creates a writer for files named `<prefix>-XXXXXX`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            dir: None,
        }
    }

    /// Creates files in `dir` instead of the system temp directory.
    #[must_use]
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    /// The file name prefix, without the trailing `-`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The directory files are created in.
    pub fn dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    /// Creates a temporary file holding `content` and returns its path.
    ///
    /// The file is kept on success; removing it is up to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TempFileCreate`] if no file could be created,
    /// [`Error::TempFileWrite`] if the write failed and
    /// [`Error::ShortWrite`] if only part of `content` was written. In the
    /// last two cases the file has been removed.
    pub fn write(&self, content: &str) -> Result<PathBuf> {
        self.write_with(content.as_bytes(), |file, buf| file.write(buf))
    }

    /// Like [`TempFileWriter::write`], performing the single write through
    /// `write`, which returns the number of bytes it wrote.
    ///
    /// # Errors
    ///
    /// Same as [`TempFileWriter::write`].
    pub fn write_with<F>(&self, content: &[u8], write: F) -> Result<PathBuf>
    where
        F: FnOnce(&mut File, &[u8]) -> io::Result<usize>,
    {
        let prefix = format!("{}-", self.prefix);
        let mut builder = tempfile::Builder::new();
        builder.prefix(&prefix).rand_bytes(RANDOM_LEN);

        let created = match &self.dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        };
        let mut temp = created.map_err(|source| {
            eprintln!(
                "Could not create temporary file {}: {source}",
                self.dir().join(format!("{prefix}XXXXXX")).display()
            );
            Error::TempFileCreate { source }
        })?;

        let path = temp.path().to_path_buf();
        let expected = content.len();
        let outcome = write(temp.as_file_mut(), content);

        let failure = match outcome {
            Ok(written) if written >= expected => None,
            Ok(written) => Some(Error::ShortWrite {
                path: path.clone(),
                written,
                expected,
            }),
            Err(source) => Some(Error::TempFileWrite {
                path: path.clone(),
                source,
            }),
        };

        if let Some(err) = failure {
            discard(temp.close(), &path);
            return Err(report_write_failure(&path, err));
        }

        let (_, kept) = temp.keep().map_err(|e| {
            let err = Error::TempFileWrite {
                path: path.clone(),
                source: e.error,
            };
            report_write_failure(&path, err)
        })?;
        log::debug!("wrote {expected} bytes to {}", kept.display());
        Ok(kept)
    }
}

impl Default for TempFileWriter {
    fn default() -> Self {
        Self::new(DEFAULT_TEMP_PREFIX)
    }
}

/// Prints the stderr diagnostic for a failed temp file write.
fn report_write_failure(path: &Path, err: Error) -> Error {
    eprintln!("Could not write temporary file {}", path.display());
    err
}

fn discard(closed: io::Result<()>, path: &Path) {
    if let Err(e) = closed {
        log::warn!("cannot remove temporary file {}: {e}", path.display());
    }
}

/// Writes `content` to a new `confutil-XXXXXX` file in the system temp
/// directory.
///
/// # Errors
///
/// Same as [`TempFileWriter::write`].
pub fn create_tmp_file(content: &str) -> Result<PathBuf> {
    TempFileWriter::default().write(content)
}
