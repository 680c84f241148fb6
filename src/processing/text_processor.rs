//! Text normalization: alphabetic tokenization and the English stop-word list

use crate::processing::document::TokenSet;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Whether common English words are dropped before tokens are used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopWords {
    #[default]
    None,
    English,
}

pub struct TextProcessor {
    stop_words: HashSet<&'static str>,
    word_regex: Regex,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        // Maximal runs of letters; digits, punctuation and symbols separate words
        let word_regex = Regex::new(r"\p{Alphabetic}+").expect("Invalid word regex");

        Self {
            stop_words: ENGLISH_STOP_WORDS.iter().copied().collect(),
            word_regex,
        }
    }

    /// Lowercased alphabetic tokens in document order, duplicates kept
    pub fn tokens(&self, text: &str) -> Vec<String> {
        self.word_regex
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .collect()
    }

    /// Same as [`tokens`](Self::tokens) with the stop-word filter applied
    pub fn filtered_tokens(&self, text: &str, stop_words: StopWords) -> Vec<String> {
        let mut tokens = self.tokens(text);
        if stop_words == StopWords::English {
            tokens.retain(|token| !self.is_stop_word(token));
        }
        tokens
    }

    /// Deduplicated lowercase tokens of `text`. Empty input gives an empty set.
    pub fn tokenize(&self, text: &str) -> TokenSet {
        self.tokens(text).into_iter().collect()
    }

    pub fn tokenize_filtered(&self, text: &str, stop_words: StopWords) -> TokenSet {
        self.filtered_tokens(text, stop_words).into_iter().collect()
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }
}

/// Convenience wrapper around a throwaway [`TextProcessor`]
pub fn tokenize(text: &str) -> TokenSet {
    TextProcessor::new().tokenize(text)
}

/// The English list shipped with common TF-IDF tooling
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against",
    "all", "almost", "alone", "along", "already", "also", "although", "always",
    "am", "among", "amongst", "amoungst", "amount", "an", "and", "another",
    "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are",
    "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being",
    "below", "beside", "besides", "between", "beyond", "bill", "both",
    "bottom", "but", "by", "call", "can", "cannot", "cant", "co", "con",
    "could", "couldnt", "cry", "de", "describe", "detail", "do", "done",
    "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "etc", "even", "ever", "every", "everyone",
    "everything", "everywhere", "except", "few", "fifteen", "fifty", "fill",
    "find", "fire", "first", "five", "for", "former", "formerly", "forty",
    "found", "four", "from", "front", "full", "further", "get", "give", "go",
    "had", "has", "hasnt", "have", "he", "hence", "her", "here", "hereafter",
    "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his",
    "how", "however", "hundred", "i", "ie", "if", "in", "inc", "indeed",
    "interest", "into", "is", "it", "its", "itself", "keep", "last", "latter",
    "latterly", "least", "less", "ltd", "made", "many", "may", "me",
    "meanwhile", "might", "mill", "mine", "more", "moreover", "most", "mostly",
    "move", "much", "must", "my", "myself", "name", "namely", "neither",
    "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone",
    "nor", "not", "nothing", "now", "nowhere", "of", "off", "often", "on",
    "once", "one", "only", "onto", "or", "other", "others", "otherwise", "our",
    "ours", "ourselves", "out", "over", "own", "part", "per", "perhaps",
    "please", "put", "rather", "re", "same", "see", "seem", "seemed",
    "seeming", "seems", "serious", "several", "she", "should", "show", "side",
    "since", "sincere", "six", "sixty", "so", "some", "somehow", "someone",
    "something", "sometime", "sometimes", "somewhere", "still", "such",
    "system", "take", "ten", "than", "that", "the", "their", "them",
    "themselves", "then", "thence", "there", "thereafter", "thereby",
    "therefore", "therein", "thereupon", "these", "they", "thick", "thin",
    "third", "this", "those", "though", "three", "through", "throughout",
    "thru", "thus", "to", "together", "too", "top", "toward", "towards",
    "twelve", "twenty", "two", "un", "under", "until", "up", "upon", "us",
    "very", "via", "was", "we", "well", "were", "what", "whatever", "when",
    "whence", "whenever", "where", "whereafter", "whereas", "whereby",
    "wherein", "whereupon", "wherever", "whether", "which", "while", "whither",
    "who", "whoever", "whole", "whom", "whose", "why", "will", "with",
    "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_dedups() {
        let processor = TextProcessor::new();
        let tokens = processor.tokenize("Rust rust RUST, Tokio!");

        assert_eq!(tokens.len(), 2);
        assert!(tokens.contains("rust"));
        assert!(tokens.contains("tokio"));
    }

    #[test]
    fn test_digits_and_symbols_split_words() {
        let processor = TextProcessor::new();
        let tokens = processor.tokens("C++ and Python3.11, node.js; 5 years");

        assert_eq!(tokens, vec!["c", "and", "python", "node", "js", "years"]);
    }

    #[test]
    fn test_unicode_letters_are_words() {
        let processor = TextProcessor::new();
        let tokens = processor.tokenize("Café Größe");

        assert!(tokens.contains("café"));
        assert!(tokens.contains("größe"));
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("123 -- 456 !!").is_empty());
    }

    #[test]
    fn test_stop_word_filter() {
        let processor = TextProcessor::new();
        let plain = processor.filtered_tokens("The developer and the team", StopWords::None);
        let filtered = processor.filtered_tokens("The developer and the team", StopWords::English);

        assert_eq!(plain.len(), 5);
        assert_eq!(filtered, vec!["developer", "team"]);
    }

    #[test]
    fn test_stop_word_list() {
        let processor = TextProcessor::new();
        assert!(ENGLISH_STOP_WORDS.iter().all(|word| processor.is_stop_word(word)));
        assert!(processor.is_stop_word("with"));
        assert!(!processor.is_stop_word("python"));
    }
}
