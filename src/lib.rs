//! kwic builds key-word-in-context tables from TEI-encoded verse editions.
//! It loads a TEI document, flattens the reading text of every line element,
//! segments it on Unicode word boundaries and writes one CSV row per word
//! together with its left and right context and dictionary links.

// Module declarations
pub mod error;
pub mod document;
pub mod parser;
pub mod segment;
pub mod kwic;
pub mod utils;
pub mod config;
pub mod types;

// Re-exports
pub use error::{Error, Result};
pub use document::{Document, Element};
pub use parser::{TextParser, TeiParser};
pub use segment::{WordSegmenter, UnicodeWordSegmenter};
pub use kwic::{extract_kwic, KwicGenerator, KwicWriter, LinkFormatter};

// Re-export the config from config module
pub use config::KwicConfig;
