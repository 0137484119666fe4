//! Progress reporting for table construction and search.
//!
//! Observers only watch: every searcher produces the same result with or
//! without one attached.

use serde::Serialize;

use crate::symbol::Symbol;
use crate::tables::SuffixRule;

/// Receives table entries and search steps as they happen. Every method
/// defaults to doing nothing.
pub trait SearchObserver<S: Symbol> {
    /// A bad-character entry was written (including overwrites).
    fn bad_char_entry(&mut self, _symbol: S, _shift: usize) {}

    fn bad_char_wildcard(&mut self, _shift: usize) {}

    /// The good-suffix shift for `matched` trailing symbols was decided.
    fn good_suffix_entry(&mut self, _matched: usize, _shift: usize, _rule: SuffixRule) {}

    fn compare(&mut self, _text_pos: usize, _pattern_pos: usize, _equal: bool) {}

    /// A mismatch moved the window. The applied shift is the larger of the two.
    fn shift(&mut self, _window_end: usize, _bad_char: usize, _good_suffix: usize) {}

    fn finished(&mut self, _result: Option<usize>) {}
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl<S: Symbol> SearchObserver<S> for NoopObserver {}

/// Forwards events to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl<S: Symbol> SearchObserver<S> for LogObserver {
    fn bad_char_entry(&mut self, symbol: S, shift: usize) {
        log::trace!(target: "bm_search", "bad-char entry {:?} -> {}", symbol, shift);
    }

    fn bad_char_wildcard(&mut self, shift: usize) {
        log::trace!(target: "bm_search", "bad-char wildcard -> {}", shift);
    }

    fn good_suffix_entry(&mut self, matched: usize, shift: usize, rule: SuffixRule) {
        log::trace!(target: "bm_search", "good-suffix [{}] -> {} ({:?})", matched, shift, rule);
    }

    fn compare(&mut self, text_pos: usize, pattern_pos: usize, equal: bool) {
        log::trace!(
            target: "bm_search",
            "compare text[{}] pattern[{}]: {}",
            text_pos,
            pattern_pos,
            if equal { "equal" } else { "mismatch" }
        );
    }

    fn shift(&mut self, window_end: usize, bad_char: usize, good_suffix: usize) {
        log::trace!(
            target: "bm_search",
            "window end {}: shift {} (bad-char {}, good-suffix {})",
            window_end,
            bad_char.max(good_suffix),
            bad_char,
            good_suffix
        );
    }

    fn finished(&mut self, result: Option<usize>) {
        match result {
            Some(pos) => log::debug!(target: "bm_search", "match at {}", pos),
            None => log::debug!(target: "bm_search", "no match"),
        }
    }
}

/// One observed step, as captured by [`RecordingObserver`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event<S> {
    BadCharEntry {
        symbol: S,
        shift: usize,
    },
    BadCharWildcard {
        shift: usize,
    },
    GoodSuffixEntry {
        matched: usize,
        shift: usize,
        rule: SuffixRule,
    },
    Compare {
        text_pos: usize,
        pattern_pos: usize,
        equal: bool,
    },
    Shift {
        window_end: usize,
        bad_char: usize,
        good_suffix: usize,
        applied: usize,
    },
    Finished {
        result: Option<usize>,
    },
}

/// Keeps every event in order.
#[derive(Clone, Debug)]
pub struct RecordingObserver<S> {
    events: Vec<Event<S>>,
}

impl<S> RecordingObserver<S> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn events(&self) -> &[Event<S>] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event<S>> {
        self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<S> Default for RecordingObserver<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> SearchObserver<S> for RecordingObserver<S> {
    fn bad_char_entry(&mut self, symbol: S, shift: usize) {
        self.events.push(Event::BadCharEntry { symbol, shift });
    }

    fn bad_char_wildcard(&mut self, shift: usize) {
        self.events.push(Event::BadCharWildcard { shift });
    }

    fn good_suffix_entry(&mut self, matched: usize, shift: usize, rule: SuffixRule) {
        self.events.push(Event::GoodSuffixEntry {
            matched,
            shift,
            rule,
        });
    }

    fn compare(&mut self, text_pos: usize, pattern_pos: usize, equal: bool) {
        self.events.push(Event::Compare {
            text_pos,
            pattern_pos,
            equal,
        });
    }

    fn shift(&mut self, window_end: usize, bad_char: usize, good_suffix: usize) {
        self.events.push(Event::Shift {
            window_end,
            bad_char,
            good_suffix,
            applied: bad_char.max(good_suffix),
        });
    }

    fn finished(&mut self, result: Option<usize>) {
        self.events.push(Event::Finished { result });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_serializes_tagged() {
        let mut recorder = RecordingObserver::<u8>::new();
        recorder.bad_char_entry(b'A', 2);
        recorder.shift(4, 1, 3);
        recorder.finished(None);

        let json = serde_json::to_value(recorder.events()).unwrap();
        assert_eq!(json[0]["event"], "bad_char_entry");
        assert_eq!(json[0]["symbol"], 65);
        assert_eq!(json[1]["applied"], 3);
        assert!(json[2]["result"].is_null());
    }

    #[test]
    fn test_clear() {
        let mut recorder = RecordingObserver::<char>::default();
        recorder.compare(0, 0, true);
        assert_eq!(recorder.events().len(), 1);
        recorder.clear();
        assert!(recorder.events().is_empty());
    }
}
