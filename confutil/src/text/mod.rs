//! Byte-wise text helpers.
//!
//! - [`find_case_insensitive`]: ASCII case-insensitive substring search
//! - [`replace_all`]: replace every occurrence of a delimiter string
//!
//! Case folding is ASCII only; bytes outside `A-Z`/`a-z` must match exactly.

pub mod replace;
pub mod search;

pub use replace::replace_all;
pub use search::find_case_insensitive;
