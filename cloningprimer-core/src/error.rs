use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrimerError {
    #[error("invalid input {ch} at position {pos}, expected sequence of lower or upper case A,T,C,G")]
    InvalidSequence { ch: char, pos: usize },

    /// `partial` holds the valid prefix read so far followed by a marker
    /// pointing at the offending character.
    #[error("invalid char in nucleotide sequence: {ch}")]
    InvalidCharacter {
        ch: char,
        pos: usize,
        partial: String,
    },

    #[error("invalid input: {ch} is not a nucleotide")]
    NotANucleotide { ch: char },

    #[error("invalid input: primer start point must be an integer > 0 (not {start})")]
    InvalidStart { start: i64 },

    #[error("invalid input random = {len}, expected integer value between 2 and 10")]
    InvalidOverhangLength { len: i64 },

    #[error(
        "invalid input length = {len}, must be an integer value >= 10 and smaller than the length \
         of the given sequence ({seq_len}) (as well as <= the maximum primer length of 30)"
    )]
    InvalidPrimerLength { len: i64, seq_len: usize },

    #[error(
        "invalid input, the given sequence ({seq_len} nucleotides) is not long enough for a primer \
         of length = {length} starting at nucleotide {start} ({end} > {seq_len})"
    )]
    SequenceTooShort {
        seq_len: usize,
        length: usize,
        start: usize,
        end: usize,
    },

    #[error("input sequence does not begin with a start codon ('ATG'); enable automatic start codon insertion to add one")]
    MissingStartCodon,

    #[error("input sequence does not begin with a stop codon ('TAA', 'TAG', 'TGA' on the complementary strand); enable automatic stop codon insertion to add one")]
    MissingStopCodon,

    #[error("invalid input: {path} is not a *.{expected} file")]
    WrongExtension { path: String, expected: &'static str },

    #[error("file not found: {path}")]
    FileNotFound { path: String },

    #[error("error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid letter in nucleotide sequence: {ch} at position {offset}")]
    InvalidSequenceChar {
        ch: char,
        offset: usize,
        partial: String,
    },

    #[error("invalid enzyme query: {0}")]
    Pattern(#[from] regex::Error),

    #[error("input sequence `primer' cannot be empty")]
    EmptySequence,

    #[error("melting temperature estimate is only valid for up to 15 nucleotides (sequence: {len}, complementary: {complementary})")]
    SequenceTooLongForTm { len: usize, complementary: usize },

    #[error("invalid input: `complementary' should be >= 0, not {len}")]
    NegativeComplementaryLength { len: isize },

    #[error("no restriction enzyme matches '{query}'")]
    UnknownEnzyme { query: String },

    #[error("'{query}' matches multiple restriction enzymes: {matches:?}")]
    AmbiguousEnzyme { query: String, matches: Vec<String> },

    #[error("invalid codon flag '{value}' (expected \"yes\" or \"no\")")]
    InvalidCodonFlag { value: String },
}

impl PrimerError {
    /// The valid prefix that was accumulated before a character error, if
    /// this error carries one.
    pub fn partial(&self) -> Option<&str> {
        match self {
            PrimerError::InvalidCharacter { partial, .. }
            | PrimerError::InvalidSequenceChar { partial, .. } => Some(partial),
            _ => None,
        }
    }
}

pub type PrimerResult<T> = Result<T, PrimerError>;
