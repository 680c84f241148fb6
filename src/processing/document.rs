//! Document structures shared by the normalizer and the similarity engine

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentOrigin {
    Resume,
    JobDescription,
}

impl fmt::Display for DocumentOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentOrigin::Resume => write!(f, "resume"),
            DocumentOrigin::JobDescription => write!(f, "job description"),
        }
    }
}

/// Extracted text of one side of a comparison. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDocument {
    content: String,
    origin: DocumentOrigin,
}

impl RawDocument {
    pub fn new(content: impl Into<String>, origin: DocumentOrigin) -> Self {
        Self {
            content: content.into(),
            origin,
        }
    }

    pub fn resume(content: impl Into<String>) -> Self {
        Self::new(content, DocumentOrigin::Resume)
    }

    pub fn job_description(content: impl Into<String>) -> Self {
        Self::new(content, DocumentOrigin::JobDescription)
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn origin(&self) -> DocumentOrigin {
        self.origin
    }

    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}

/// Lowercase, deduplicated word tokens. Iteration is alphabetical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet(BTreeSet<String>);

impl TokenSet {
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tokens present in `self` but not in `other`, in alphabetical order.
    pub fn difference<'a>(&'a self, other: &'a TokenSet) -> impl Iterator<Item = &'a str> {
        self.0.difference(&other.0).map(String::as_str)
    }
}

impl FromIterator<String> for TokenSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
