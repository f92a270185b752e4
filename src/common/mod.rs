//!
//! Common utilities: locations, and the streams codepoints come from.
//!

pub mod file;
pub mod location;
pub mod source;

pub use file::*;
pub use location::*;
pub use source::*;
