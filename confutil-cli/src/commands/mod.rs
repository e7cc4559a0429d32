//! CLI command implementations.
//!
//! - `resolve`: Resolve a path and create its parent directory
//! - `dirs`: Show home, config and cache directories
//! - `lines`: Print the unique entries of a file
//! - `search`: Case-insensitive substring search
//! - `replace`: Replace every occurrence of a string
//! - `tmp`: Write content to a temporary file
//! - `touch`: Create an empty file if missing
//! - `completions`: Shell completion scripts

pub mod completions;
pub mod dirs;
pub mod lines;
pub mod replace;
pub mod resolve;
pub mod search;
pub mod tmp;
pub mod touch;

pub use completions::CompletionsCommand;
pub use dirs::DirsCommand;
pub use lines::LinesCommand;
pub use replace::ReplaceCommand;
pub use resolve::ResolveCommand;
pub use search::SearchCommand;
pub use tmp::TmpCommand;
pub use touch::TouchCommand;
