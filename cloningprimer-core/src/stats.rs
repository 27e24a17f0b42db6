//! Rough primer statistics: GC content and the Wallace-rule melting
//! temperature, `Tm = 2 * (A + T) + 4 * (G + C)`.

use crate::error::{PrimerError, PrimerResult};
use crate::seq::DnaSeq;

pub const MAX_TM_LENGTH: usize = 15;

fn normalized_nonempty(primer: &str) -> PrimerResult<DnaSeq> {
    let seq = DnaSeq::normalized(primer)?;
    if seq.is_empty() {
        return Err(PrimerError::EmptySequence);
    }
    Ok(seq)
}

/// Fraction of `G` and `C` in `primer`, between 0 and 1.
pub fn gc_content(primer: &str) -> PrimerResult<f64> {
    let seq = normalized_nonempty(primer)?;
    let gc = seq
        .as_bytes()
        .iter()
        .filter(|&&b| b == b'G' || b == b'C')
        .count();
    Ok(gc as f64 / seq.len() as f64)
}

/// Melting temperature in °C over the last `complementary` bases of
/// `primer` (5' -> 3'), or over the whole primer when `complementary` is 0.
pub fn melting_temperature(primer: &str, complementary: isize) -> PrimerResult<f64> {
    if complementary < 0 {
        return Err(PrimerError::NegativeComplementaryLength { len: complementary });
    }
    let complementary = complementary.unsigned_abs();
    let seq = normalized_nonempty(primer)?;
    if seq.len() > MAX_TM_LENGTH || complementary > MAX_TM_LENGTH {
        return Err(PrimerError::SequenceTooLongForTm {
            len: seq.len(),
            complementary,
        });
    }

    let take = if complementary == 0 {
        seq.len()
    } else {
        complementary
    };
    let (mut at, mut gc) = (0u32, 0u32);
    for &b in seq.as_bytes().iter().rev().take(take) {
        match b {
            b'G' | b'C' => gc += 1,
            _ => at += 1,
        }
    }
    Ok(f64::from(2 * at + 4 * gc))
}
