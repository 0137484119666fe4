//! Shift tables for Boyer-Moore search.
//!
//! 1. Bad-character table: for a mismatched text symbol, how far the window may
//!    move so that the symbol's rightmost occurrence in the pattern lines up.
//!
//! 2. Good-suffix table: for a run of `k` trailing symbols that already
//!    matched, how far the window may move so that the run lines up with
//!    another occurrence of it (or with a prefix of the pattern that borders it).
//!
//! Both are built once per pattern and never change afterwards.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::observer::{NoopObserver, SearchObserver};
use crate::symbol::{ShiftMap, Symbol};

/// Bad-character shifts with a wildcard default for symbols outside the pattern.
#[derive(Clone, Debug)]
pub struct BadCharTable<S: Symbol> {
    shifts: S::Shifts,
    wildcard: usize,
}

impl<S: Symbol> BadCharTable<S> {
    pub fn build(pattern: &[S]) -> Self {
        Self::build_with(pattern, &mut NoopObserver)
    }

    /// Builds the table, reporting every entry to `observer` as it is set.
    ///
    /// Positions `0..len-1` are written in increasing order, so a repeated
    /// symbol ends up with the shift of its rightmost occurrence before the
    /// final position. The final symbol only gets an entry (the full pattern
    /// length) if it does not occur earlier.
    pub fn build_with<O>(pattern: &[S], observer: &mut O) -> Self
    where
        O: SearchObserver<S> + ?Sized,
    {
        let len = pattern.len();
        let mut shifts = <S::Shifts as ShiftMap<S>>::empty();

        if let Some((&last, init)) = pattern.split_last() {
            for (i, &symbol) in init.iter().enumerate() {
                let shift = (len - 1 - i).max(1);
                shifts.insert(symbol, shift);
                observer.bad_char_entry(symbol, shift);
            }
            if shifts.get(last).is_none() {
                shifts.insert(last, len);
                observer.bad_char_entry(last, len);
            }
        }

        observer.bad_char_wildcard(len);
        Self {
            shifts,
            wildcard: len,
        }
    }

    /// Shift for `symbol`, falling back to the wildcard.
    #[inline]
    pub fn lookup(&self, symbol: S) -> usize {
        self.shifts.get(symbol).unwrap_or(self.wildcard)
    }

    /// The explicit entry for `symbol`, if the pattern contains it.
    pub fn get(&self, symbol: S) -> Option<usize> {
        self.shifts.get(symbol)
    }

    pub fn wildcard(&self) -> usize {
        self.wildcard
    }

    /// Number of explicit entries (distinct pattern symbols).
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    pub fn entries(&self) -> Vec<(S, usize)> {
        self.shifts.entries()
    }
}

impl BadCharTable<char> {
    /// Looks up a symbol given as a string, which must hold exactly one `char`.
    pub fn lookup_str(&self, symbol: &str) -> Result<usize> {
        let mut chars = symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(self.lookup(c)),
            _ => Err(Error::NotASingleSymbol {
                input: symbol.to_string(),
                units: symbol.chars().count(),
            }),
        }
    }
}

/// How a good-suffix entry was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuffixRule {
    /// Nothing matched yet; move by one.
    Empty,
    /// Another occurrence of the suffix starts at `start`.
    Occurrence { start: usize },
    /// A pattern prefix of `length` symbols equals the tail of the suffix.
    Border { length: usize },
    /// Neither; move past the whole window.
    Whole,
}

/// Good-suffix shifts indexed by the number of trailing symbols matched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoodSuffixTable {
    shifts: Vec<usize>,
}

impl GoodSuffixTable {
    pub fn build<S: Symbol>(pattern: &[S]) -> Self {
        Self::build_with(pattern, &mut NoopObserver)
    }

    /// Builds the table. An empty pattern gives an empty table.
    pub fn build_with<S, O>(pattern: &[S], observer: &mut O) -> Self
    where
        S: Symbol,
        O: SearchObserver<S> + ?Sized,
    {
        let len = pattern.len();
        let mut shifts = Vec::with_capacity(len);
        if len == 0 {
            return Self { shifts };
        }

        shifts.push(1);
        observer.good_suffix_entry(0, 1, SuffixRule::Empty);

        for matched in 1..len {
            let (shift, rule) = suffix_shift(pattern, matched);
            shifts.push(shift);
            observer.good_suffix_entry(matched, shift, rule);
        }

        Self { shifts }
    }

    /// Shift after `matched` trailing symbols agreed and the next one did not.
    ///
    /// Panics if `matched` is not below the pattern length.
    #[inline]
    pub fn shift(&self, matched: usize) -> usize {
        self.shifts[matched]
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.shifts
    }
}

/// Decides the shift for a suffix of `matched` symbols, `0 < matched < len`.
fn suffix_shift<S: Symbol>(pattern: &[S], matched: usize) -> (usize, SuffixRule) {
    let len = pattern.len();
    let start = len - matched;
    let suffix = &pattern[start..];
    let before = pattern[start - 1];

    // Closest occurrence first. Occurrences may overlap the suffix itself, and
    // one preceded by the same symbol as the suffix would mismatch again.
    for j in (0..start).rev() {
        if pattern[j..j + matched] != *suffix {
            continue;
        }
        if j == 0 || pattern[j - 1] != before {
            return (start - j, SuffixRule::Occurrence { start: j });
        }
    }

    for length in (1..matched).rev() {
        if suffix[matched - length..] == pattern[..length] {
            return (len - length, SuffixRule::Border { length });
        }
    }

    (len, SuffixRule::Whole)
}
