//! File reading, list loading and temporary files.
//!
//! - [`reader`]: whole-file and line-based reads with stderr diagnostics
//! - [`unique_list`]: order-preserving, deduplicating list loading
//! - [`temp`]: uniquely named temporary files with content

pub mod reader;
pub mod temp;
pub mod unique_list;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use reader::{read_contents, read_lines, split_lines};
pub use temp::{create_tmp_file, TempFileWriter, DEFAULT_TEMP_PREFIX};
pub use unique_list::{
    file_to_unique_list, same_entry, EntryParser, FnParser, UniqueList, UniqueListBuilder,
    UniqueListLoader,
};
