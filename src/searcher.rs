//! Boyer-Moore search over precomputed shift tables.

use crate::observer::{NoopObserver, SearchObserver};
use crate::symbol::Symbol;
use crate::tables::{BadCharTable, GoodSuffixTable};
use crate::SubstringSearcher;

/// First occurrence of `pattern` in `text`.
///
/// Both tables must have been built from `pattern`. An empty pattern, or one
/// longer than the text, is never found.
pub fn search<S: Symbol>(
    text: &[S],
    pattern: &[S],
    bad_char: &BadCharTable<S>,
    good_suffix: &GoodSuffixTable,
) -> Option<usize> {
    search_with(text, pattern, bad_char, good_suffix, &mut NoopObserver)
}

/// [`search`], reporting each comparison, shift and the result to `observer`.
pub fn search_with<S, O>(
    text: &[S],
    pattern: &[S],
    bad_char: &BadCharTable<S>,
    good_suffix: &GoodSuffixTable,
    observer: &mut O,
) -> Option<usize>
where
    S: Symbol,
    O: SearchObserver<S> + ?Sized,
{
    debug_assert_eq!(good_suffix.len(), pattern.len());

    let result = scan(text, pattern, bad_char, good_suffix, observer);
    observer.finished(result);
    result
}

#[inline]
fn scan<S, O>(
    text: &[S],
    pattern: &[S],
    bad_char: &BadCharTable<S>,
    good_suffix: &GoodSuffixTable,
    observer: &mut O,
) -> Option<usize>
where
    S: Symbol,
    O: SearchObserver<S> + ?Sized,
{
    let pattern_len = pattern.len();
    if pattern_len == 0 || pattern_len > text.len() {
        return None;
    }

    let last = pattern_len - 1;
    let mut window_end = last;

    'windows: while window_end < text.len() {
        // `matched` symbols agreed so far, counting back from the window end
        for matched in 0..pattern_len {
            let text_pos = window_end - matched;
            let symbol = text[text_pos];
            let equal = symbol == pattern[last - matched];
            observer.compare(text_pos, last - matched, equal);

            if !equal {
                let bad = bad_char.lookup(symbol).saturating_sub(matched).max(1);
                let good = good_suffix.shift(matched);
                observer.shift(window_end, bad, good);
                window_end += bad.max(good);
                continue 'windows;
            }
        }
        return Some(window_end - last);
    }

    None
}

/// A pattern compiled once and searched for in any number of texts.
#[derive(Clone, Debug)]
pub struct BoyerMoore<S: Symbol> {
    pattern: Vec<S>,
    bad_char: BadCharTable<S>,
    good_suffix: GoodSuffixTable,
}

impl<S: Symbol> BoyerMoore<S> {
    pub fn new(pattern: &[S]) -> Self {
        Self::new_with(pattern, &mut NoopObserver)
    }

    /// Compiles `pattern`, reporting table entries to `observer`.
    pub fn new_with<O>(pattern: &[S], observer: &mut O) -> Self
    where
        O: SearchObserver<S> + ?Sized,
    {
        Self {
            pattern: pattern.to_vec(),
            bad_char: BadCharTable::build_with(pattern, observer),
            good_suffix: GoodSuffixTable::build_with(pattern, observer),
        }
    }

    #[inline]
    pub fn find(&self, text: &[S]) -> Option<usize> {
        search(text, &self.pattern, &self.bad_char, &self.good_suffix)
    }

    pub fn find_with<O>(&self, text: &[S], observer: &mut O) -> Option<usize>
    where
        O: SearchObserver<S> + ?Sized,
    {
        search_with(text, &self.pattern, &self.bad_char, &self.good_suffix, observer)
    }

    pub fn pattern(&self) -> &[S] {
        &self.pattern
    }

    pub fn bad_char_table(&self) -> &BadCharTable<S> {
        &self.bad_char
    }

    pub fn good_suffix_table(&self) -> &GoodSuffixTable {
        &self.good_suffix
    }
}

/// Compiles the needle on every call.
pub struct BoyerMooreSearcher;

impl SubstringSearcher for BoyerMooreSearcher {
    fn find(&self, haystack: &[u8], needle: &[u8]) -> Option<usize> {
        if needle.is_empty() || needle.len() > haystack.len() {
            return None;
        }
        BoyerMoore::new(needle).find(haystack)
    }
}

/// Searches by `char`, returning the match as a `char` index.
pub fn find_str(text: &str, pattern: &str) -> Option<usize> {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    BoyerMoore::new(&pattern).find(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::{Event, LogObserver, RecordingObserver};
    use crate::verify_find;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn find(text: &str, pattern: &str) -> Option<usize> {
        BoyerMoore::new(pattern.as_bytes()).find(text.as_bytes())
    }

    #[test]
    fn test_scenarios() {
        assert_eq!(find("XXABCXX", "ABC"), Some(2));
        assert_eq!(find("AAAA", "AAA"), Some(0));
        assert_eq!(find("abcdef", "NOTFOUND"), None);
        assert_eq!(find("anything", ""), None);
        assert_eq!(find("ABABABAB", "ABAB"), Some(0));
        assert_eq!(find("GCATCGCAGAGAGTATACAGTACG", "GCAGAGAG"), Some(5));
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(find("", ""), None);
        assert_eq!(find("", "a"), None);
        assert_eq!(find("ab", "abc"), None);
        assert_eq!(find("abc", "abc"), Some(0));
    }

    #[test]
    fn test_overlapping_suffix_occurrence() {
        // A good-suffix scan that ignores overlapping occurrences jumps past these
        assert_eq!(find("BAAA", "AAA"), Some(1));
        assert_eq!(find("AABBAAA", "AAA"), Some(4));
        assert_eq!(find("BAAAA", "AAA"), Some(1));
    }

    #[test]
    fn test_free_function_matches_compiled() {
        let pattern = b"abbabab";
        let bad = BadCharTable::build(pattern);
        let good = GoodSuffixTable::build(pattern);
        let text = b"babbababbabbababab";

        let bm = BoyerMoore::new(pattern);
        assert_eq!(search(text, pattern, &bad, &good), bm.find(text));
        assert_eq!(bm.find(text), Some(1));
        assert_eq!(bm.pattern(), pattern);
        assert_eq!(bm.good_suffix_table(), &good);
    }

    #[test]
    fn test_repeated_calls_agree() {
        let bm = BoyerMoore::new(b"GCAGAGAG");
        let text = b"GCATCGCAGAGAGTATACAGTACG";
        let first = bm.find(text);
        for _ in 0..5 {
            assert_eq!(bm.find(text), first);
        }
    }

    #[test]
    fn test_find_str_counts_chars() {
        assert_eq!(find_str("naïve café", "café"), Some(6));
        assert_eq!(find_str("日本語のテキスト", "テキ"), Some(4));
        assert_eq!(find_str("abc", "é"), None);
    }

    #[test]
    fn test_wide_symbols() {
        let text: Vec<u16> = "hello world".encode_utf16().collect();
        let pattern: Vec<u16> = "o w".encode_utf16().collect();
        assert_eq!(BoyerMoore::new(&pattern).find(&text), Some(4));

        let text: Vec<u32> = vec![7, 1, 2, 1, 2, 3, 9];
        assert_eq!(BoyerMoore::new(&[1u32, 2, 3]).find(&text), Some(3));
    }

    #[test]
    fn test_observer_trace() {
        let bm = BoyerMoore::new(b"ABC");
        let mut recorder = RecordingObserver::new();
        let result = bm.find_with(b"XXABCXX", &mut recorder);
        assert_eq!(result, Some(2));

        let events = recorder.into_events();
        // 'A' at window end 2: bad-char 2, good-suffix 1
        assert_eq!(
            events[0],
            Event::Compare { text_pos: 2, pattern_pos: 2, equal: false }
        );
        assert_eq!(
            events[1],
            Event::Shift { window_end: 2, bad_char: 2, good_suffix: 1, applied: 2 }
        );
        let compares = events
            .iter()
            .filter(|e| matches!(e, Event::Compare { equal: true, .. }))
            .count();
        assert_eq!(compares, 3);
        assert_eq!(events.last(), Some(&Event::Finished { result: Some(2) }));
    }

    #[test]
    fn test_observer_does_not_change_result() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let text: Vec<u8> = (0..40).map(|_| rng.gen_range(b'a'..=b'c')).collect();
            let pattern: Vec<u8> = (0..rng.gen_range(1..5)).map(|_| rng.gen_range(b'a'..=b'c')).collect();
            let bm = BoyerMoore::new_with(&pattern, &mut LogObserver);
            let mut recorder = RecordingObserver::new();
            assert_eq!(bm.find_with(&text, &mut recorder), bm.find(&text));
            assert_eq!(bm.find_with(&text, &mut LogObserver), bm.find(&text));
        }
    }

    #[test]
    fn test_random_against_reference() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for alphabet in [&b"AB"[..], b"ABC", b"ACGT"] {
            for _ in 0..2_000 {
                let pattern_len = rng.gen_range(1..=8);
                let text_len = rng.gen_range(0..=40);
                let pattern: Vec<u8> = (0..pattern_len)
                    .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
                    .collect();
                let text: Vec<u8> = (0..text_len)
                    .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
                    .collect();

                let bm = BoyerMoore::new(&pattern);
                let bad_char = bm.bad_char_table();
                assert_eq!(bad_char.wildcard(), pattern_len);
                for (_, shift) in bad_char.entries() {
                    assert!((1..=pattern_len).contains(&shift));
                }
                let good_suffix = bm.good_suffix_table();
                assert_eq!(good_suffix.len(), pattern_len);
                assert_eq!(good_suffix.shift(0), 1);
                for &shift in good_suffix.as_slice() {
                    assert!((1..=pattern_len).contains(&shift), "pattern {:?}", pattern);
                }

                let result = bm.find(&text);
                assert!(
                    verify_find(&text, &pattern, result),
                    "pattern {:?} text {:?} got {:?}",
                    String::from_utf8_lossy(&pattern),
                    String::from_utf8_lossy(&text),
                    result
                );
            }
        }
    }

    #[test]
    fn test_searcher_trait() {
        crate::tests::test_searcher(&BoyerMooreSearcher);
    }
}
