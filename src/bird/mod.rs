//! Bird list parsing: entry model, fragment parser and scientific-name collation.
pub mod collation;
pub mod entry;
pub mod parser;

pub use entry::BirdEntry;
pub use parser::parse;
