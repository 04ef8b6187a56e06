//! Exhaustive survey of decoder behaviour over low-weight error patterns.
//!
//! Starting from a clean codeword, every error pattern of a given weight is
//! applied and decoded. Each outcome falls into one bucket:
//!
//! - restored: the decoder recovered the clean codeword
//! - miscorrected: the decoder flipped a bit but landed on a different vector
//! - detected: the decoder reported the vector as uncorrectable
//! - undetected: the corrupted vector already had a zero syndrome
//!
//! Patterns are independent, so they are decoded in parallel.

use crate::bits::BitVector;
use crate::ecc::decoder::{decode, DecodeStatus};
use crate::ecc::gf2::compute_syndrome;
use crate::error::{Error, Result};
use log::debug;
use rayon::prelude::*;
use std::fmt::{Display, Formatter};

/// Largest number of error patterns, summed over all weights, one survey may decode
pub const MAX_SURVEY_PATTERNS: usize = 1_000_000;

/// Tally of decoder outcomes for every error pattern of one weight
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeightSummary {
    /// Number of flipped bits in each pattern
    pub weight: usize,
    /// Number of patterns tried, C(n, weight)
    pub total: usize,
    pub restored: usize,
    pub miscorrected: usize,
    pub detected: usize,
    pub undetected: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Restored,
    Miscorrected,
    Detected,
    Undetected,
}

impl WeightSummary {
    fn record(&mut self, outcome: Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Restored => self.restored += 1,
            Outcome::Miscorrected => self.miscorrected += 1,
            Outcome::Detected => self.detected += 1,
            Outcome::Undetected => self.undetected += 1,
        }
    }
}

impl Display for WeightSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "weight {}: {} patterns, {} restored, {} miscorrected, {} detected, {} undetected",
            self.weight, self.total, self.restored, self.miscorrected, self.detected, self.undetected
        )
    }
}

/// Decodes every error pattern of weight 1..=`max_weight` applied to `codeword`.
///
/// # Arguments
///
/// * `codeword` - A clean codeword (zero syndrome against `generator`)
/// * `generator` - Generator pattern
/// * `max_weight` - Largest number of simultaneous bit errors to try
///
/// # Returns
///
/// One [`WeightSummary`] per weight, in ascending order of weight
pub fn survey_error_patterns(
    codeword: &BitVector,
    generator: &BitVector,
    max_weight: usize,
) -> Result<Vec<WeightSummary>> {
    if max_weight == 0 || max_weight > codeword.len() {
        return Err(Error::InvalidInput(format!(
            "Maximum error weight must be between 1 and {}, got {}",
            codeword.len(),
            max_weight
        )));
    }
    let pattern_count = (1..=max_weight)
        .map(|weight| binomial(codeword.len(), weight))
        .fold(0usize, usize::saturating_add);
    if pattern_count > MAX_SURVEY_PATTERNS {
        return Err(Error::InputTooLarge {
            length: pattern_count,
            max_length: MAX_SURVEY_PATTERNS,
        });
    }
    if !compute_syndrome(codeword, generator)?.is_zero() {
        return Err(Error::InvalidInput(format!(
            "{} is not a codeword of generator {}",
            codeword.to_bit_string(),
            generator.to_bit_string()
        )));
    }

    let mut summaries = Vec::with_capacity(max_weight);
    for weight in 1..=max_weight {
        let patterns = combinations(codeword.len(), weight);
        let outcomes = patterns
            .par_iter()
            .map(|positions| classify(codeword, generator, positions))
            .collect::<Result<Vec<_>>>()?;

        let mut summary = WeightSummary {
            weight,
            ..WeightSummary::default()
        };
        for outcome in outcomes {
            summary.record(outcome);
        }
        debug!("{}", summary);
        summaries.push(summary);
    }

    Ok(summaries)
}

fn classify(codeword: &BitVector, generator: &BitVector, positions: &[usize]) -> Result<Outcome> {
    let mut noisy = codeword.clone();
    for &position in positions {
        noisy.flip(position)?;
    }

    let syndrome = compute_syndrome(&noisy, generator)?;
    let result = decode(&noisy, &syndrome, generator)?;

    Ok(match result.status {
        DecodeStatus::NoError => Outcome::Undetected,
        DecodeStatus::Uncorrectable => Outcome::Detected,
        DecodeStatus::Corrected { .. } if result.corrected == *codeword => Outcome::Restored,
        DecodeStatus::Corrected { .. } => Outcome::Miscorrected,
    })
}

/// C(n, k), saturating at `usize::MAX`
fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        // Each partial product is C(n, i + 1) and therefore an integer
        result = match result.checked_mul((n - i) as u128) {
            Some(product) => product / (i as u128 + 1),
            None => return usize::MAX,
        };
    }
    usize::try_from(result).unwrap_or(usize::MAX)
}

/// All `k`-element subsets of `0..n` in lexicographic order
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut result = Vec::new();
    if k > n {
        return result;
    }

    let mut indices: Vec<usize> = (0..k).collect();
    loop {
        result.push(indices.clone());

        // Find the rightmost index that can still be advanced
        let mut i = k;
        while i > 0 && indices[i - 1] == n - k + i - 1 {
            i -= 1;
        }
        if i == 0 {
            return result;
        }

        indices[i - 1] += 1;
        for j in i..k {
            indices[j] = indices[j - 1] + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(s: &str) -> BitVector {
        s.parse().unwrap()
    }

    #[test]
    fn test_combinations() {
        assert_eq!(
            combinations(4, 2),
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
        assert_eq!(combinations(3, 3), vec![vec![0, 1, 2]]);
        assert_eq!(combinations(5, 1).len(), 5);
        assert_eq!(combinations(7, 3).len(), 35);
        assert!(combinations(2, 3).is_empty());
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(7, 0), 1);
        assert_eq!(binomial(7, 2), 21);
        assert_eq!(binomial(7, 3), 35);
        assert_eq!(binomial(32, 16), 601_080_390);
        assert_eq!(binomial(3, 4), 0);
        assert_eq!(binomial(200, 100), usize::MAX);
    }

    #[test]
    fn test_survey_rejects_oversized_pattern_count() {
        // C(32, 1) + ... + C(32, 16) is far above the cap; nothing is enumerated
        let result = survey_error_patterns(&BitVector::zeros(32), &bits("1011"), 16);
        assert!(matches!(
            result,
            Err(Error::InputTooLarge {
                length,
                max_length: MAX_SURVEY_PATTERNS,
            }) if length > MAX_SURVEY_PATTERNS
        ));

        // The same codeword at a small weight stays within the cap
        let summaries = survey_error_patterns(&BitVector::zeros(32), &bits("1011"), 2).unwrap();
        assert_eq!(summaries[0].total, 32);
        assert_eq!(summaries[1].total, 496);
    }

    #[test]
    fn test_survey_hamming_7_4() {
        let summaries = survey_error_patterns(&bits("1101001"), &bits("1011"), 3).unwrap();
        assert_eq!(summaries.len(), 3);

        // Every single error is repaired
        assert_eq!(
            summaries[0],
            WeightSummary {
                weight: 1,
                total: 7,
                restored: 7,
                ..WeightSummary::default()
            }
        );

        // Perfect code: every double error looks like some single error
        assert_eq!(summaries[1].total, 21);
        assert_eq!(summaries[1].miscorrected, 21);

        // 7 of the 35 triple errors are themselves codewords
        assert_eq!(summaries[2].total, 35);
        assert_eq!(summaries[2].undetected, 7);
        assert_eq!(summaries[2].miscorrected, 28);
    }

    #[test]
    fn test_survey_detects_some_double_errors() {
        let summaries = survey_error_patterns(&bits("0010011"), &bits("10011"), 2).unwrap();
        assert_eq!(summaries[0].restored, 7);

        let doubles = summaries[1];
        assert_eq!(doubles.total, 21);
        assert_eq!(
            doubles.restored + doubles.miscorrected + doubles.detected + doubles.undetected,
            21
        );
        assert!(doubles.detected > 0);
        assert_eq!(doubles.restored, 0);
    }

    #[test]
    fn test_survey_rejects_bad_input() {
        assert!(matches!(
            survey_error_patterns(&bits("1101000"), &bits("1011"), 1),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            survey_error_patterns(&bits("1101001"), &bits("1011"), 0),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            survey_error_patterns(&bits("1101001"), &bits("1011"), 8),
            Err(Error::InvalidInput(_))
        ));
    }
}
