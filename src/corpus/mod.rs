// Corpus ingestion — raw tweet lines in, validated (user, text) documents out.

pub mod parse;
pub mod reader;
pub mod stats;

pub use parse::Document;
