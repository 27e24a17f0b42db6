use crate::alphabets::Alphabet;
use crate::error::{PrimerError, PrimerResult};
use std::sync::LazyLock;

/// Appended to the valid prefix of a sequence that failed normalization.
pub const INVALID_MARKER: &str =
    " ... this character is not a valid nucleotide (must be one of A,T,C,G)";

static NUCLEOTIDES: LazyLock<Alphabet> = LazyLock::new(|| Alphabet::new(b"ACGTacgt"));

// tab, line feed, vertical tab, form feed, carriage return, space
static BLANKS: LazyLock<Alphabet> = LazyLock::new(|| Alphabet::new(b"\t\n\x0b\x0c\r "));

static COMPLEMENT: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut comp = [0; 256];
    b"AGCT"
        .iter()
        .zip(b"TCGA".iter())
        .for_each(|(&a, &b)| {
            comp[a as usize] = b;
            comp[a.to_ascii_lowercase() as usize] = b;
        });
    comp
});

pub fn alphabet() -> &'static Alphabet {
    &NUCLEOTIDES
}

#[inline]
pub fn is_nucleotide(a: u8) -> bool {
    NUCLEOTIDES.contains(a)
}

/// Whitespace and control bytes that are silently dropped from sequence input.
#[inline]
pub fn is_blank(a: u8) -> bool {
    BLANKS.contains(a)
}

/// Watson-Crick partner of `a`, always upper case.
#[inline]
pub fn complement(a: u8) -> PrimerResult<u8> {
    match COMPLEMENT[a as usize] {
        0 => Err(PrimerError::NotANucleotide { ch: a as char }),
        c => Ok(c),
    }
}

/// Reverses `seq` without validating it.
pub fn reverse(seq: &str) -> String {
    seq.chars().rev().collect()
}

pub fn reverse_complement(text: &[u8]) -> PrimerResult<Vec<u8>> {
    text.iter().rev().map(|&a| complement(a)).collect()
}

/// Strips blanks from `input` and upper-cases every nucleotide.
///
/// On the first non-nucleotide byte the error carries the upper-cased prefix
/// read so far, the offending character and [`INVALID_MARKER`].
pub fn normalize(input: &[u8]) -> PrimerResult<String> {
    let mut out = String::with_capacity(input.len());
    for (i, &b) in input.iter().enumerate() {
        if is_blank(b) {
            continue;
        }
        if !is_nucleotide(b) {
            let ch = b as char;
            let mut partial = out;
            partial.push(ch);
            partial.push_str(INVALID_MARKER);
            return Err(PrimerError::InvalidCharacter {
                ch,
                pos: i + 1,
                partial,
            });
        }
        out.push(b.to_ascii_uppercase() as char);
    }
    Ok(out)
}
