//! Generated text/pattern pairs for the benchmark.

use rand::Rng;

/// A haystack and the needle to look for in it.
pub type Case = (Vec<u8>, Vec<u8>);

pub fn generate<R: Rng>(rng: &mut R) -> Vec<Case> {
    let mut cases = Vec::new();

    // Large haystack with needle at various positions
    let large: Vec<u8> = (0..100_000).map(|_| rng.gen_range(b'a'..=b'z')).collect();

    // Needle at end
    let mut haystack = large.clone();
    haystack.extend_from_slice(b"MARKER");
    cases.push((haystack, b"MARKER".to_vec()));

    // Needle at beginning
    let mut haystack = b"NEEDLE".to_vec();
    haystack.extend_from_slice(&large);
    cases.push((haystack, b"NEEDLE".to_vec()));

    // Needle in middle
    let mut haystack = large[..50_000].to_vec();
    haystack.extend_from_slice(b"FINDME");
    haystack.extend_from_slice(&large[50_000..]);
    cases.push((haystack, b"FINDME".to_vec()));

    // Needle not present
    cases.push((large.clone(), b"ZZZZZ".to_vec()));

    // Long needle, where the skip distance pays off
    let mut haystack = large[..80_000].to_vec();
    let long_needle = b"the quick brown fox jumps over the lazy dog".to_vec();
    haystack.extend_from_slice(&long_needle);
    cases.push((haystack, long_needle));

    // Short haystack, short needle
    cases.push((b"hello world".to_vec(), b"wor".to_vec()));

    // Single byte needle
    cases.push((large.clone(), b"x".to_vec()));

    // Small alphabet, many partial matches
    let medium: Vec<u8> = (0..10_000).map(|_| rng.gen_range(b'a'..=b'd')).collect();
    cases.push((medium, b"abcdabcd".to_vec()));

    // Periodic haystack and needle
    let repeated: Vec<u8> = b"abcdefgh".repeat(10_000);
    cases.push((repeated, b"efghabcdefgx".to_vec()));

    // Binary data
    let binary: Vec<u8> = (0..50_000).map(|_| rng.gen::<u8>()).collect();
    cases.push((binary, vec![0x00, 0x01, 0x02, 0x03]));

    // DNA-like sequence
    let dna: Vec<u8> = (0..100_000)
        .map(|_| b"ACGT"[rng.gen_range(0..4)])
        .collect();
    cases.push((dna.clone(), b"GATTACA".to_vec()));
    cases.push((dna, b"GCAGAGAG".to_vec()));

    cases
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_is_seeded() {
        let a = generate(&mut StdRng::seed_from_u64(1));
        let b = generate(&mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
        assert!(a.iter().all(|(_, needle)| !needle.is_empty()));

        let (dna, _) = &a[a.len() - 1];
        assert!(dna.iter().all(|b| b"ACGT".contains(b)));
    }

    #[test]
    fn test_planted_needles() {
        let cases = generate(&mut StdRng::seed_from_u64(2));
        let (haystack, needle) = &cases[0];
        assert!(haystack.ends_with(needle));
        let (haystack, needle) = &cases[1];
        assert!(haystack.starts_with(needle));
    }
}
