//! Forward and reverse cloning primers.
//!
//! A primer reads `overhang + recognition site + [codon] + window`, where the
//! window is the 1-based closed interval `[start, start + length - 1]` of the
//! sense strand (forward) or of its reverse complement (reverse).

#[cfg(test)]
mod tests;

use crate::error::{PrimerError, PrimerResult};
use crate::seq::codon::{self, START_CODON, STOP_OCHRE_RC};
use crate::seq::overhang::{add_overhang, Placement};
use crate::seq::DnaSeq;

use log::debug;
use std::borrow::Cow;
use std::fmt;

pub const MIN_PRIMER_LENGTH: usize = 10;
pub const MAX_PRIMER_LENGTH: usize = 30;
pub const MIN_OVERHANG: usize = 2;
pub const MAX_OVERHANG: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    /// The strand the window is cut from.
    fn prepare(self, seq: &DnaSeq) -> PrimerResult<Cow<'_, DnaSeq>> {
        match self {
            Strand::Forward => Ok(Cow::Borrowed(seq)),
            Strand::Reverse => seq.reverse_complement().map(Cow::Owned),
        }
    }

    fn begins_with_codon(self, window: &str) -> bool {
        match self {
            Strand::Forward => codon::has_start_codon(window, true),
            Strand::Reverse => codon::has_stop_codon(window, true),
        }
    }

    /// Codon inserted when the window lacks one; `TAA` on the antisense strand.
    fn codon(self) -> &'static str {
        match self {
            Strand::Forward => START_CODON,
            Strand::Reverse => STOP_OCHRE_RC,
        }
    }

    fn missing_codon(self) -> PrimerError {
        match self {
            Strand::Forward => PrimerError::MissingStartCodon,
            Strand::Reverse => PrimerError::MissingStopCodon,
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Forward => f.write_str("forward"),
            Strand::Reverse => f.write_str("reverse"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrimerParams {
    /// 1-based position of the first complementary nucleotide.
    pub start: usize,
    /// Number of complementary nucleotides, without any inserted codon.
    pub length: usize,
    pub overhang: usize,
    pub auto_add_codon: bool,
}

impl PrimerParams {
    pub fn new(start: usize, length: usize, overhang: usize, auto_add_codon: bool) -> Self {
        Self {
            start,
            length,
            overhang,
            auto_add_codon,
        }
    }

    /// Parameters as they arrive from dynamically typed callers. A negative
    /// value fails with the error of the check it would fail, in the same
    /// order as [`design_primer`] runs its checks.
    pub fn from_signed(
        seq: &str,
        start: i64,
        length: i64,
        overhang: i64,
        auto_add_codon: bool,
    ) -> PrimerResult<Self> {
        if start < 1 {
            return Err(PrimerError::InvalidStart { start });
        }
        if overhang < 0 || length < 0 {
            let dna = DnaSeq::new(seq)?;
            if !(signed(MIN_OVERHANG)..=signed(MAX_OVERHANG)).contains(&overhang) {
                return Err(PrimerError::InvalidOverhangLength { len: overhang });
            }
            return Err(PrimerError::InvalidPrimerLength {
                len: length,
                seq_len: dna.len(),
            });
        }
        Ok(Self::new(
            unsigned(start),
            unsigned(length),
            unsigned(overhang),
            auto_add_codon,
        ))
    }

    /// Checks run in a fixed order and the first failure is returned.
    fn validate(&self, seq: &str) -> PrimerResult<DnaSeq> {
        if self.start < 1 {
            return Err(PrimerError::InvalidStart {
                start: signed(self.start),
            });
        }
        let dna = DnaSeq::new(seq)?;
        if !(MIN_OVERHANG..=MAX_OVERHANG).contains(&self.overhang) {
            return Err(PrimerError::InvalidOverhangLength {
                len: signed(self.overhang),
            });
        }
        if !(MIN_PRIMER_LENGTH..=MAX_PRIMER_LENGTH).contains(&self.length)
            || self.length > dna.len()
        {
            return Err(PrimerError::InvalidPrimerLength {
                len: signed(self.length),
                seq_len: dna.len(),
            });
        }
        match self.end() {
            Some(end) if end <= dna.len() => Ok(dna),
            _ => Err(self.too_short(dna.len())),
        }
    }

    /// Last 1-based position covered by the window, `None` on overflow.
    fn end(&self) -> Option<usize> {
        self.start.checked_add(self.length.saturating_sub(1))
    }

    fn too_short(&self, seq_len: usize) -> PrimerError {
        PrimerError::SequenceTooShort {
            seq_len,
            length: self.length,
            start: self.start,
            end: self.end().unwrap_or(usize::MAX),
        }
    }
}

fn signed(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

fn unsigned(n: i64) -> usize {
    usize::try_from(n).unwrap_or(usize::MAX)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Primer {
    pub strand: Strand,
    pub sequence: String,
    /// Whether a start (forward) or stop (reverse) codon was inserted.
    pub codon_added: bool,
}

impl Primer {
    pub fn as_str(&self) -> &str {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

impl fmt::Display for Primer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sequence)
    }
}

pub fn design_primer(
    strand: Strand,
    seq: &str,
    recognition_site: &str,
    params: &PrimerParams,
) -> PrimerResult<Primer> {
    let dna = params.validate(seq)?;
    let template = strand.prepare(&dna)?;
    let window = template
        .window(params.start, params.length)
        .ok_or_else(|| params.too_short(dna.len()))?;

    let codon_added = !strand.begins_with_codon(window);
    if codon_added && !params.auto_add_codon {
        return Err(strand.missing_codon());
    }

    let mut body = String::with_capacity(recognition_site.len() + 3 + window.len());
    body.push_str(recognition_site);
    if codon_added {
        debug!("{strand} primer: inserting {} before window {window}", strand.codon());
        body.push_str(strand.codon());
    }
    body.push_str(window);

    let sequence = add_overhang(&body, params.overhang, Placement::Front);
    Ok(Primer {
        strand,
        sequence,
        codon_added,
    })
}

/// Forward primer binding nucleotides `[start, start + length - 1]` of `seq`.
///
/// Without a leading `ATG` in that window a start codon is inserted when
/// `auto_add_start_codon` is set, which makes the primer three bases longer.
pub fn find_forward(
    seq: &str,
    recognition_site: &str,
    start: usize,
    length: usize,
    overhang: usize,
    auto_add_start_codon: bool,
) -> PrimerResult<String> {
    let params = PrimerParams::new(start, length, overhang, auto_add_start_codon);
    design_primer(Strand::Forward, seq, recognition_site, &params).map(|p| p.sequence)
}

/// Reverse primer binding nucleotides `[start, start + length - 1]` of the
/// reverse complement of `seq`.
pub fn find_reverse(
    seq: &str,
    recognition_site: &str,
    start: usize,
    length: usize,
    overhang: usize,
    auto_add_stop_codon: bool,
) -> PrimerResult<String> {
    let params = PrimerParams::new(start, length, overhang, auto_add_stop_codon);
    design_primer(Strand::Reverse, seq, recognition_site, &params).map(|p| p.sequence)
}
