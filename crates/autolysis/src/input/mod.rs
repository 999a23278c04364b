//! Dataset loading: encoding detection, decoding and delimited parsing.

mod encoding;
mod parser;
mod source;

pub use encoding::{DetectedEncoding, decode, detect_encoding};
pub use parser::Parser;
pub use source::{DataTable, SourceMetadata};
