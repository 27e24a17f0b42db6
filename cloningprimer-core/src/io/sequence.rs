//! Reader for `*.seq` files: one nucleotide sequence, possibly spread over
//! many lines. Lines starting with `/*` are comments. Blanks are ignored
//! everywhere, any other non-nucleotide byte is an error.

use crate::alphabets::dna;
use crate::error::{PrimerError, PrimerResult};
use crate::io::{read_input, FileFormat};
use crate::seq::DnaSeq;

use log::info;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    LineStart,
    Sequence,
    Comment,
}

/// The error for an invalid byte carries the sequence read up to that point
/// and the byte's 0-based offset within the sequence.
pub fn read_sequence_from_bytes(data: &[u8]) -> PrimerResult<DnaSeq> {
    let mut seq = String::with_capacity(data.len());
    let mut state = State::LineStart;

    for (i, &b) in data.iter().enumerate() {
        if b == b'\n' {
            state = State::LineStart;
            continue;
        }
        if state == State::LineStart {
            state = if b == b'/' && data.get(i + 1) == Some(&b'*') {
                State::Comment
            } else {
                State::Sequence
            };
        }
        if state == State::Comment || dna::is_blank(b) {
            continue;
        }
        if !dna::is_nucleotide(b) {
            return Err(PrimerError::InvalidSequenceChar {
                ch: b as char,
                offset: seq.len(),
                partial: seq,
            });
        }
        seq.push(b.to_ascii_uppercase() as char);
    }

    Ok(DnaSeq::from_normalized(seq))
}

pub fn read_sequence_from_path(path: impl AsRef<Path>) -> PrimerResult<DnaSeq> {
    let path = path.as_ref();
    let data = read_input(path, FileFormat::Sequence)?;
    let seq = read_sequence_from_bytes(&data)?;
    info!("parsed {} nucleotides from '{}'", seq.len(), path.display());
    Ok(seq)
}
