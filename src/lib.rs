//! Boyer-Moore Substring Search
//!
//! Single-pattern exact search combining a bad-character table and a
//! good-suffix table. The `tables` module builds both from a pattern, the
//! `searcher` module scans a text with them, and `baselines` holds the
//! reference searchers it is measured and checked against.

pub mod baselines;
pub mod config;
pub mod corpus;
pub mod error;
pub mod observer;
pub mod searcher;
pub mod symbol;
pub mod tables;

pub use error::{Error, Result};
pub use observer::{Event, LogObserver, NoopObserver, RecordingObserver, SearchObserver};
pub use searcher::{find_str, search, search_with, BoyerMoore, BoyerMooreSearcher};
pub use symbol::Symbol;
pub use tables::{BadCharTable, GoodSuffixTable, SuffixRule};

/// Trait for substring search implementations
pub trait SubstringSearcher {
    /// Find the first occurrence of needle in haystack.
    /// Returns the offset of the first match, or None if not found.
    /// An empty needle is never found.
    fn find(&self, haystack: &[u8], needle: &[u8]) -> Option<usize>;
}

/// Verify that a search result is correct: either the first occurrence,
/// or `None` when there is none.
pub fn verify_find<S: PartialEq>(text: &[S], pattern: &[S], result: Option<usize>) -> bool {
    result == reference_find(text, pattern)
}

/// Reference implementation for verification
pub(crate) fn reference_find<S: PartialEq>(text: &[S], pattern: &[S]) -> Option<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return None;
    }
    text.windows(pattern.len()).position(|w| w == pattern)
}
