pub mod detect;
pub mod enzymes;
pub mod sequence;

pub use detect::FileFormat;
pub use enzymes::{read_enzymes_from_bytes, read_enzymes_from_path};
pub use sequence::{read_sequence_from_bytes, read_sequence_from_path};

use crate::error::{PrimerError, PrimerResult};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Reads the whole file after checking that its extension matches `format`.
pub(crate) fn read_input(path: &Path, format: FileFormat) -> PrimerResult<Vec<u8>> {
    let path_str = path.display().to_string();
    if FileFormat::from_path(path) != Some(format) {
        return Err(PrimerError::WrongExtension {
            path: path_str,
            expected: format.extension(),
        });
    }
    fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => PrimerError::FileNotFound { path: path_str },
        _ => PrimerError::Io {
            path: path_str,
            source,
        },
    })
}
