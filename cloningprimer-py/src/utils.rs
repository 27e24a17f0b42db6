use pyo3::exceptions::{PyFileNotFoundError, PyIOError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyString;

use cloningprimer_core::error::PrimerError;

use crate::dna::DNA;

/// File errors become `FileNotFoundError` / `OSError`, everything else
/// `ValueError`. Errors that carry the valid prefix read so far pass it as
/// the second exception argument.
pub fn map_primer_err(err: PrimerError) -> PyErr {
    let msg = err.to_string();
    match &err {
        PrimerError::FileNotFound { .. } => PyFileNotFoundError::new_err(msg),
        PrimerError::Io { .. } => PyIOError::new_err(msg),
        _ => match err.partial() {
            Some(partial) => PyValueError::new_err((msg, partial.to_string())),
            None => PyValueError::new_err(msg),
        },
    }
}

pub fn extract_bytes<'py>(obj: &Bound<'py, PyAny>) -> PyResult<Vec<u8>> {
    if let Ok(dna) = obj.extract::<PyRef<'py, DNA>>() {
        return Ok(dna.as_bytes().to_vec());
    }

    if let Ok(s) = obj.downcast::<PyString>() {
        return Ok(s.to_str()?.as_bytes().to_vec());
    }

    obj.extract::<Vec<u8>>()
        .map_err(|_| PyTypeError::new_err("expected DNA, str, or bytes-like object"))
}

/// A single nucleotide given as a one-character str or an int in 0..=255.
pub fn extract_byte(obj: &Bound<'_, PyAny>) -> PyResult<u8> {
    if let Ok(s) = obj.downcast::<PyString>() {
        let s = s.to_str()?;
        return match s.as_bytes() {
            [b] => Ok(*b),
            _ => Err(PyValueError::new_err("expected a single character")),
        };
    }

    if let Ok(n) = obj.extract::<i64>() {
        if (0..=255).contains(&n) {
            return Ok(n as u8);
        }
        return Err(PyValueError::new_err("nucleotide must be an int in range 0..=255"));
    }

    Err(PyTypeError::new_err("expected str or int"))
}
