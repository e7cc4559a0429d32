//! Order-preserving, deduplicating list loading.
//!
//! A file such as a history or bookmark list is read line by line. Every
//! non-blank line goes through an [`EntryParser`]; parsed entries are folded
//! into a [`UniqueList`] holding at most one entry per key.
//!
//! When a key appears again, the newer entry wins and takes the position of
//! the newer line: the old entry is released and the new one goes to the
//! end. The final order is therefore the order in which each surviving key
//! was *last* seen, top to bottom.
//!
//! ```
//! use confutil::file::{FnParser, UniqueListLoader};
//!
//! let loader = UniqueListLoader::new(FnParser::new(
//!     |line: &str| Some(line.to_string()),
//!     |entry: &String| entry.clone(),
//! ));
//!
//! let list = loader.load_str("a\nb\na\n");
//! assert_eq!(list.as_slice(), ["b", "a"]);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::path::Path;

use crate::file::reader::{read_contents, split_lines, trim_line};

/// Turns lines into entries and defines when two entries are the same.
///
/// Two entries are equal exactly when their keys are equal; [`EntryParser::key`]
/// is the only notion of equality. A case-insensitive list, for example,
/// returns a case-folded key. [`same_entry`] compares two entries this way.
pub trait EntryParser {
    /// The value produced for one line.
    type Entry;

    /// The deduplication key of an entry.
    type Key: Eq + Hash;

    /// Parses one trimmed, non-empty line. `None` skips the line.
    fn parse(&self, line: &str) -> Option<Self::Entry>;

    /// Returns the key identifying the equality class of `entry`.
    fn key(&self, entry: &Self::Entry) -> Self::Key;

    /// Called with every entry evicted by a newer duplicate.
    fn release(&self, entry: Self::Entry) {
        drop(entry);
    }
}

/// Whether `a` and `b` belong to the same equality class of `parser`.
///
/// # Examples
///
/// ```
/// use confutil::file::{same_entry, FnParser};
///
/// let parser = FnParser::new(|l: &str| Some(l.to_string()), |e: &String| e.to_lowercase());
/// assert!(same_entry(&parser, &"ABC".to_string(), &"abc".to_string()));
/// ```
pub fn same_entry<P: EntryParser + ?Sized>(parser: &P, a: &P::Entry, b: &P::Entry) -> bool {
    parser.key(a) == parser.key(b)
}

/// An [`EntryParser`] built from a parse closure and a key closure.
pub struct FnParser<T, Q, P, K> {
    parse: P,
    key: K,
    _types: PhantomData<fn() -> (T, Q)>,
}

impl<T, Q, P, K> FnParser<T, Q, P, K>
where
    P: Fn(&str) -> Option<T>,
    K: Fn(&T) -> Q,
    Q: Eq + Hash,
{
    /// Creates a parser from `parse` and `key`.
    pub fn new(parse: P, key: K) -> Self {
        Self {
            parse,
            key,
            _types: PhantomData,
        }
    }
}

impl<T, Q, P, K> EntryParser for FnParser<T, Q, P, K>
where
    P: Fn(&str) -> Option<T>,
    K: Fn(&T) -> Q,
    Q: Eq + Hash,
{
    type Entry = T;
    type Key = Q;

    fn parse(&self, line: &str) -> Option<T> {
        (self.parse)(line)
    }

    fn key(&self, entry: &T) -> Q {
        (self.key)(entry)
    }
}

impl<T, Q, P, K> fmt::Debug for FnParser<T, Q, P, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnParser").finish_non_exhaustive()
    }
}

/// Ordered entries with at most one entry per key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueList<T> {
    entries: Vec<T>,
}

impl<T> UniqueList<T> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// The entries as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    /// Consumes the list, returning the entries.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.entries
    }
}

impl<T> Default for UniqueList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntoIterator for UniqueList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Incremental fold of lines or entries into a [`UniqueList`].
///
/// Entries live in insertion slots; a key maps to the slot of its current
/// entry. Replacing an entry empties the old slot and appends a new one, so
/// skipping empty slots at the end yields last-seen order.
pub struct UniqueListBuilder<'p, P: EntryParser> {
    parser: &'p P,
    slots: Vec<Option<P::Entry>>,
    index: HashMap<P::Key, usize>,
}

impl<'p, P: EntryParser> UniqueListBuilder<'p, P> {
    /// Starts an empty fold using `parser`.
    pub fn new(parser: &'p P) -> Self {
        Self {
            parser,
            slots: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Trims `line`, skips it if blank, otherwise parses and inserts it.
    ///
    /// Returns whether the line produced an entry.
    pub fn push_line(&mut self, line: &str) -> bool {
        let line = trim_line(line);
        if line.is_empty() {
            return false;
        }
        match self.parser.parse(line) {
            Some(entry) => {
                self.push_entry(entry);
                true
            }
            None => false,
        }
    }

    /// Inserts `entry` at the end, evicting the entry with the same key.
    pub fn push_entry(&mut self, entry: P::Entry) {
        let key = self.parser.key(&entry);
        let slot = self.slots.len();

        if let Some(previous) = self.index.insert(key, slot) {
            if let Some(old) = self.slots[previous].take() {
                self.parser.release(old);
            }
        }

        self.slots.push(Some(entry));
    }

    /// Number of distinct keys currently held.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether no entry has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Finishes the fold.
    pub fn finish(self) -> UniqueList<P::Entry> {
        UniqueList {
            entries: self.slots.into_iter().flatten().collect(),
        }
    }
}

/// Loads files into [`UniqueList`]s with a fixed parser.
#[derive(Debug, Clone)]
pub struct UniqueListLoader<P> {
    parser: P,
}

impl<P: EntryParser> UniqueListLoader<P> {
    /// Creates a loader around `parser`.
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    /// The parser used for every line.
    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Loads the file at `path`.
    ///
    /// A missing or unreadable file yields an empty list; the reader has
    /// already reported the failure on stderr.
    pub fn load(&self, path: &Path) -> UniqueList<P::Entry> {
        match read_contents(path) {
            Ok(content) => self.load_str(&content),
            Err(e) => {
                log::debug!("loading {} as empty list: {e}", path.display());
                UniqueList::new()
            }
        }
    }

    /// Folds in-memory text, one entry per `\n`-separated line.
    pub fn load_str(&self, content: &str) -> UniqueList<P::Entry> {
        let mut builder = UniqueListBuilder::new(&self.parser);
        for line in split_lines(content) {
            builder.push_line(line);
        }
        builder.finish()
    }
}

/// Loads `path` into a [`UniqueList`] using closures for parsing and keying.
///
/// # Examples
///
/// ```
/// use confutil::file::file_to_unique_list;
/// use std::path::Path;
///
/// let list = file_to_unique_list(
///     Path::new("/nonexistent"),
///     |line: &str| Some(line.to_string()),
///     |entry: &String| entry.clone(),
/// );
/// assert!(list.is_empty());
/// ```
pub fn file_to_unique_list<T, Q, P, K>(path: &Path, parse: P, key: K) -> UniqueList<T>
where
    P: Fn(&str) -> Option<T>,
    K: Fn(&T) -> Q,
    Q: Eq + Hash,
{
    UniqueListLoader::new(FnParser::new(parse, key)).load(path)
}
