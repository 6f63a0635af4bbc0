//! Term compression for BIAN service-domain summaries.
//!
//! Two passes:
//! 1. Dictionary: ordered, case-insensitive phrase -> abbreviation rewrites
//! 2. Whitespace: collapse runs to a single space and trim

pub mod compressor;
pub mod dictionary;
pub mod whitespace;

pub use compressor::TermCompressor;
pub use dictionary::{DictionaryEntry, ReplacementDictionary, BIAN_TERMS};

#[cfg(test)]
mod tests;
