//! TF-IDF vectorization over a small, per-comparison corpus

use crate::processing::text_processor::{StopWords, TextProcessor};
use std::collections::{BTreeMap, HashMap};

/// Term → column index. Built from the documents being compared and nothing else.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: BTreeMap<String, usize>,
}

impl Vocabulary {
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get(term).copied()
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }
}

/// Sparse TF-IDF weights keyed by vocabulary index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    weights: BTreeMap<usize, f64>,
}

impl TermVector {
    pub fn weight(&self, index: usize) -> f64 {
        self.weights.get(&index).copied().unwrap_or(0.0)
    }

    pub fn non_zero(&self) -> usize {
        self.weights.len()
    }

    pub fn dot(&self, other: &TermVector) -> f64 {
        // Walk the shorter vector
        let (small, large) = if self.weights.len() <= other.weights.len() {
            (self, other)
        } else {
            (other, self)
        };

        small
            .weights
            .iter()
            .map(|(index, weight)| weight * large.weight(*index))
            .sum()
    }

    pub fn norm(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    /// Cosine of the angle between the two vectors, in [0, 1].
    /// A zero vector on either side yields 0.0 instead of NaN.
    pub fn cosine_similarity(&self, other: &TermVector) -> f64 {
        let denominator = self.norm() * other.norm();
        if denominator == 0.0 {
            return 0.0;
        }
        (self.dot(other) / denominator).clamp(0.0, 1.0)
    }
}

/// Result of fitting a vectorizer: the vocabulary, its IDF weights and one row per document
#[derive(Debug, Clone)]
pub struct TfidfMatrix {
    pub vocabulary: Vocabulary,
    pub idf: Vec<f64>,
    pub rows: Vec<TermVector>,
}

impl TfidfMatrix {
    pub fn row(&self, index: usize) -> Option<&TermVector> {
        self.rows.get(index)
    }
}

/// Raw-count TF with smoothed IDF: `idf(t) = ln((1 + n) / (1 + df(t))) + 1`.
pub struct TfidfVectorizer<'a> {
    processor: &'a TextProcessor,
    stop_words: StopWords,
}

impl<'a> TfidfVectorizer<'a> {
    pub fn new(processor: &'a TextProcessor, stop_words: StopWords) -> Self {
        Self {
            processor,
            stop_words,
        }
    }

    pub fn fit_transform(&self, documents: &[&str]) -> TfidfMatrix {
        let counts: Vec<HashMap<String, usize>> = documents
            .iter()
            .map(|doc| {
                let mut tf = HashMap::new();
                for token in self.processor.filtered_tokens(doc, self.stop_words) {
                    *tf.entry(token).or_insert(0) += 1;
                }
                tf
            })
            .collect();

        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for tf in &counts {
            for term in tf.keys() {
                *document_frequency.entry(term.clone()).or_insert(0) += 1;
            }
        }

        let n = documents.len() as f64;
        let mut terms = BTreeMap::new();
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (index, (term, df)) in document_frequency.into_iter().enumerate() {
            idf.push(((1.0 + n) / (1.0 + df as f64)).ln() + 1.0);
            terms.insert(term, index);
        }
        let vocabulary = Vocabulary { terms };

        let rows = counts
            .iter()
            .map(|tf| {
                let weights = tf
                    .iter()
                    .filter_map(|(term, count)| {
                        vocabulary
                            .index_of(term)
                            .map(|index| (index, *count as f64 * idf[index]))
                    })
                    .collect();
                TermVector { weights }
            })
            .collect();

        TfidfMatrix {
            vocabulary,
            idf,
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fit(docs: &[&str], stop_words: StopWords) -> TfidfMatrix {
        let processor = TextProcessor::new();
        TfidfVectorizer::new(&processor, stop_words).fit_transform(docs)
    }

    #[test]
    fn test_vocabulary_is_joint_and_sorted() {
        let matrix = fit(&["rust tokio", "rust serde"], StopWords::None);
        let terms: Vec<&str> = matrix.vocabulary.terms().collect();
        assert_eq!(terms, vec!["rust", "serde", "tokio"]);
    }

    #[test]
    fn test_smoothed_idf() {
        let matrix = fit(&["rust tokio", "rust serde"], StopWords::None);
        let shared = matrix.vocabulary.index_of("rust").unwrap();
        let unique = matrix.vocabulary.index_of("tokio").unwrap();

        assert!((matrix.idf[shared] - 1.0).abs() < 1e-12);
        assert!((matrix.idf[unique] - (1.5f64.ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_term_frequency_is_raw_count() {
        let matrix = fit(&["rust rust rust", "rust"], StopWords::None);
        let index = matrix.vocabulary.index_of("rust").unwrap();
        assert!((matrix.rows[0].weight(index) - 3.0).abs() < 1e-12);
        assert!((matrix.rows[1].weight(index) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_stop_words_excluded_from_vocabulary() {
        let matrix = fit(&["the rust and the tokio", "and"], StopWords::English);
        assert_eq!(matrix.vocabulary.len(), 2);
        assert!(matrix.vocabulary.index_of("the").is_none());
        assert_eq!(matrix.rows[1].non_zero(), 0);
    }

    #[test]
    fn test_cosine_of_zero_vector_is_zero() {
        let matrix = fit(&["", "rust"], StopWords::None);
        let similarity = matrix.rows[0].cosine_similarity(&matrix.rows[1]);
        assert_eq!(similarity, 0.0);
    }

    #[test]
    fn test_cosine_identity() {
        let matrix = fit(&["rust rust tokio", "rust rust tokio"], StopWords::None);
        let similarity = matrix.rows[0].cosine_similarity(&matrix.rows[1]);
        assert!((similarity - 1.0).abs() < 1e-9);
    }
}
