//! Property-based tests for the divider, encoder and single-error decoder.

use bchviz::ecc::{compute_syndrome, decode, divide_mod2, encode_systematic, DecodeStatus};
use bchviz::BitVector;
use proptest::prelude::*;

/// Generator pattern with a leading 1 and 1 to 6 bits in total
fn generator() -> impl Strategy<Value = BitVector> {
    proptest::collection::vec(any::<bool>(), 0..6)
        .prop_map(|tail| std::iter::once(true).chain(tail).collect())
}

fn message() -> impl Strategy<Value = BitVector> {
    proptest::collection::vec(any::<bool>(), 1..12).prop_map(|bits| bits.into_iter().collect())
}

/// A generator and a dividend at least as long as it
fn generator_and_dividend() -> impl Strategy<Value = (BitVector, BitVector)> {
    proptest::collection::vec(any::<bool>(), 1..7).prop_flat_map(|g| {
        let len = g.len();
        (
            Just(g.into_iter().collect::<BitVector>()),
            proptest::collection::vec(any::<bool>(), len..len + 16)
                .prop_map(|d| d.into_iter().collect::<BitVector>()),
        )
    })
}

proptest! {
    /// Remainder length is fixed by the divisor whenever the dividend is long enough.
    #[test]
    fn prop_remainder_length((g, d) in generator_and_dividend()) {
        let remainder = divide_mod2(&d, &g).unwrap();
        prop_assert_eq!(remainder.len(), g.len() - 1);
    }

    /// Division is deterministic and never touches its inputs.
    #[test]
    fn prop_divide_deterministic((g, d) in generator_and_dividend()) {
        let before = (g.clone(), d.clone());
        let first = divide_mod2(&d, &g).unwrap();
        let second = divide_mod2(&d, &g).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!((g, d), before);
    }

    /// With a leading-1 generator the syndrome is linear in the received vector.
    #[test]
    fn prop_syndrome_linear(g in generator(), m in message(), n in message()) {
        let len = m.len().max(n.len()) + g.len();
        let a: BitVector = m.iter().chain(std::iter::repeat(false)).take(len).collect();
        let b: BitVector = n.iter().chain(std::iter::repeat(true)).take(len).collect();

        let sum = compute_syndrome(&a.xor(&b).unwrap(), &g).unwrap();
        let parts = compute_syndrome(&a, &g)
            .unwrap()
            .xor(&compute_syndrome(&b, &g).unwrap())
            .unwrap();
        prop_assert_eq!(sum, parts);
    }

    /// Encoded codewords decode to themselves with no error reported.
    #[test]
    fn prop_clean_codeword_unchanged(g in generator(), m in message()) {
        let codeword = encode_systematic(&m, &g).unwrap();
        let syndrome = compute_syndrome(&codeword, &g).unwrap();
        prop_assert!(syndrome.is_zero());

        let result = decode(&codeword, &syndrome, &g).unwrap();
        prop_assert_eq!(result.status, DecodeStatus::NoError);
        prop_assert_eq!(result.corrected, codeword);
    }

    /// A single flip is always undone at that index or an earlier one that
    /// also zeroes the syndrome.
    #[test]
    fn prop_single_flip_resolved(g in generator(), m in message(), seed in any::<usize>()) {
        let codeword = encode_systematic(&m, &g).unwrap();
        let i = seed % codeword.len();
        let noisy = codeword.flipped(i).unwrap();

        let syndrome = compute_syndrome(&noisy, &g).unwrap();
        let result = decode(&noisy, &syndrome, &g).unwrap();

        match result.status {
            DecodeStatus::NoError => prop_assert!(syndrome.is_zero()),
            DecodeStatus::Corrected { position } => {
                prop_assert!(position <= i);
                prop_assert!(compute_syndrome(&result.corrected, &g).unwrap().is_zero());
                if position == i {
                    prop_assert_eq!(&result.corrected, &codeword);
                }
            }
            DecodeStatus::Uncorrectable => prop_assert!(false, "single flip reported uncorrectable"),
        }
    }

    /// Uncorrectable means no single flip could zero the syndrome.
    #[test]
    fn prop_uncorrectable_is_exhaustive(g in generator(), m in message(), e in message()) {
        let codeword = encode_systematic(&m, &g).unwrap();
        let pattern: BitVector = e.iter().chain(std::iter::repeat(false)).take(codeword.len()).collect();
        let noisy = codeword.xor(&pattern).unwrap();

        let syndrome = compute_syndrome(&noisy, &g).unwrap();
        let result = decode(&noisy, &syndrome, &g).unwrap();

        if result.status == DecodeStatus::Uncorrectable {
            prop_assert_eq!(&result.corrected, &noisy);
            for i in 0..noisy.len() {
                let trial = noisy.flipped(i).unwrap();
                prop_assert!(!compute_syndrome(&trial, &g).unwrap().is_zero());
            }
        }
    }
}
