use crate::alphabets::dna;
use crate::error::{PrimerError, PrimerResult};

use memchr::memmem;
use std::fmt;
use std::str::FromStr;

/// Upper-case sequence over `A`, `C`, `G`, `T`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DnaSeq {
    seq: String,
}

impl DnaSeq {
    /// Strict construction: every byte must be a nucleotide. The first
    /// offending byte is reported with its 1-based position.
    pub fn new(bytes: impl AsRef<[u8]>) -> PrimerResult<Self> {
        let bytes = bytes.as_ref();
        if let Some((idx, b)) = dna::alphabet().first_mismatch(bytes) {
            return Err(PrimerError::InvalidSequence {
                ch: b as char,
                pos: idx + 1,
            });
        }
        let seq = bytes
            .iter()
            .map(|b| b.to_ascii_uppercase() as char)
            .collect();
        Ok(Self { seq })
    }

    /// Lenient construction from free text: blanks are dropped, see
    /// [`dna::normalize`].
    pub fn normalized(input: impl AsRef<[u8]>) -> PrimerResult<Self> {
        dna::normalize(input.as_ref()).map(Self::from_normalized)
    }

    /// `seq` must already be upper-case nucleotides.
    pub(crate) fn from_normalized(seq: String) -> Self {
        debug_assert!(seq.bytes().all(|b| matches!(b, b'A' | b'C' | b'G' | b'T')));
        Self { seq }
    }

    pub fn as_str(&self) -> &str {
        &self.seq
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.seq.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Closed 1-based interval `[start, start + length - 1]`.
    pub fn window(&self, start: usize, length: usize) -> Option<&str> {
        let begin = start.checked_sub(1)?;
        let end = begin.checked_add(length)?;
        self.seq.get(begin..end)
    }

    pub fn reverse_complement(&self) -> PrimerResult<Self> {
        let seq = dna::reverse_complement(self.as_bytes())?
            .into_iter()
            .map(char::from)
            .collect();
        Ok(Self { seq })
    }

    pub fn contains(&self, needle: &[u8]) -> bool {
        needle.is_empty() || memmem::find(self.as_bytes(), needle).is_some()
    }
}

impl FromStr for DnaSeq {
    type Err = PrimerError;

    fn from_str(s: &str) -> PrimerResult<Self> {
        Self::new(s)
    }
}

impl fmt::Display for DnaSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.seq)
    }
}

impl AsRef<[u8]> for DnaSeq {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
