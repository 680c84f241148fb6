//! Text processing and analysis module

pub mod document;
pub mod text_processor;
pub mod tfidf;
pub mod analyzer;
