//! Reference searchers the Boyer-Moore implementation is checked and timed against.

use crate::tables::BadCharTable;
use crate::SubstringSearcher;

/// Naive O(n*m) substring search
pub struct NaiveSearcher;

impl SubstringSearcher for NaiveSearcher {
    fn find(&self, haystack: &[u8], needle: &[u8]) -> Option<usize> {
        crate::reference_find(haystack, needle)
    }
}

/// memchr crate's memmem searcher
pub struct MemchrSearcher;

impl SubstringSearcher for MemchrSearcher {
    #[inline]
    fn find(&self, haystack: &[u8], needle: &[u8]) -> Option<usize> {
        if needle.is_empty() {
            return None;
        }
        memchr::memmem::find(haystack, needle)
    }
}

/// Single-table variant: every window moves by the bad-character shift of
/// the byte under the pattern's last position, whatever mismatched.
pub struct HorspoolSearcher;

impl SubstringSearcher for HorspoolSearcher {
    fn find(&self, haystack: &[u8], needle: &[u8]) -> Option<usize> {
        if needle.is_empty() || needle.len() > haystack.len() {
            return None;
        }

        // Entries before the final position are the Horspool skips, and a
        // final byte seen nowhere else gets the full length like the wildcard.
        let table = BadCharTable::build(needle);
        let last = needle.len() - 1;
        let mut window_end = last;

        while window_end < haystack.len() {
            let start = window_end - last;
            if haystack[window_end] == needle[last]
                && haystack[start..window_end] == needle[..last]
            {
                return Some(start);
            }
            window_end += table.lookup(haystack[window_end]);
        }

        None
    }
}
