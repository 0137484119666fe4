//! Symbol types and the per-symbol shift storage behind the bad-character table.
//!
//! Bytes get a dense 256-slot array; wider alphabets fall back to a hash map.
//! Either way a missing symbol reads as `None`, and the caller supplies the
//! wildcard default.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;

/// A fixed-width unit compared by equality.
pub trait Symbol: Copy + Eq + Ord + Hash + Debug + Serialize + Send + Sync + 'static {
    /// Storage for shifts keyed by this symbol type.
    type Shifts: ShiftMap<Self>;
}

/// Explicit shift entries, keyed by symbol.
pub trait ShiftMap<S>: Clone + Debug + Send + Sync {
    fn empty() -> Self;

    fn get(&self, symbol: S) -> Option<usize>;

    /// Sets the entry, replacing any previous value.
    fn insert(&mut self, symbol: S, shift: usize);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All explicit entries, ordered by symbol.
    fn entries(&self) -> Vec<(S, usize)>;
}

/// One slot per byte value.
#[derive(Clone, Debug)]
pub struct DenseShifts {
    slots: Box<[Option<usize>; 256]>,
    len: usize,
}

impl ShiftMap<u8> for DenseShifts {
    fn empty() -> Self {
        Self {
            slots: Box::new([None; 256]),
            len: 0,
        }
    }

    #[inline]
    fn get(&self, symbol: u8) -> Option<usize> {
        self.slots[symbol as usize]
    }

    fn insert(&mut self, symbol: u8, shift: usize) {
        if self.slots[symbol as usize].replace(shift).is_none() {
            self.len += 1;
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn entries(&self) -> Vec<(u8, usize)> {
        (0..=u8::MAX)
            .filter_map(|b| self.slots[b as usize].map(|shift| (b, shift)))
            .collect()
    }
}

impl Symbol for u8 {
    type Shifts = DenseShifts;
}

/// Hash map keyed by symbol, for alphabets too wide for a slot array.
#[derive(Clone, Debug)]
pub struct SparseShifts<S> {
    map: HashMap<S, usize>,
}

impl<S: Copy + Eq + Ord + Hash + Debug + Send + Sync> ShiftMap<S> for SparseShifts<S> {
    fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    #[inline]
    fn get(&self, symbol: S) -> Option<usize> {
        self.map.get(&symbol).copied()
    }

    fn insert(&mut self, symbol: S, shift: usize) {
        self.map.insert(symbol, shift);
    }

    fn len(&self) -> usize {
        self.map.len()
    }

    fn entries(&self) -> Vec<(S, usize)> {
        let mut entries: Vec<_> = self.map.iter().map(|(&s, &shift)| (s, shift)).collect();
        entries.sort_unstable_by_key(|&(s, _)| s);
        entries
    }
}

macro_rules! sparse_symbol {
    ($($ty:ty),*) => {
        $(
            impl Symbol for $ty {
                type Shifts = SparseShifts<$ty>;
            }
        )*
    };
}

sparse_symbol!(char, u16, u32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dense_insert_counts_distinct() {
        let mut shifts = DenseShifts::empty();
        assert!(shifts.is_empty());
        shifts.insert(b'a', 3);
        shifts.insert(b'a', 1);
        shifts.insert(b'z', 2);

        assert_eq!(shifts.len(), 2);
        assert_eq!(shifts.get(b'a'), Some(1));
        assert_eq!(shifts.get(b'b'), None);
        assert_eq!(shifts.entries(), vec![(b'a', 1), (b'z', 2)]);
    }

    #[test]
    fn test_sparse_entries_sorted() {
        let mut shifts = SparseShifts::<char>::empty();
        shifts.insert('λ', 2);
        shifts.insert('a', 4);
        shifts.insert('λ', 1);

        assert_eq!(shifts.len(), 2);
        assert_eq!(shifts.get('λ'), Some(1));
        assert_eq!(shifts.get('b'), None);
        assert_eq!(shifts.entries(), vec![('a', 4), ('λ', 1)]);
    }
}
