//! Input file format, decided by extension only.
//!
//! - `.re`  → restriction enzyme records
//! - `.seq` → a single nucleotide sequence

use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileFormat {
    Enzymes,
    Sequence,
}

impl FileFormat {
    pub fn extension(self) -> &'static str {
        match self {
            FileFormat::Enzymes => "re",
            FileFormat::Sequence => "seq",
        }
    }

    /// Extensions are compared exactly, so `enzymes.RE` is not an enzyme file.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        match path.as_ref().extension()?.to_str()? {
            "re" => Some(FileFormat::Enzymes),
            "seq" => Some(FileFormat::Sequence),
            _ => None,
        }
    }
}
