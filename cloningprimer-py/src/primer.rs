#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::utils::map_primer_err;
use cloningprimer_core::primer::{design_primer, PrimerParams, Strand};

/// Python ints may be negative; those become the matching `ValueError`
/// rather than an `OverflowError` from argument conversion.
fn design(
    strand: Strand,
    seq: &str,
    recognition_site: &str,
    start: i64,
    length: i64,
    overhang: i64,
    auto_add_codon: bool,
) -> PyResult<String> {
    let params = PrimerParams::from_signed(seq, start, length, overhang, auto_add_codon)
        .map_err(map_primer_err)?;
    design_primer(strand, seq, recognition_site, &params)
        .map(|primer| primer.sequence)
        .map_err(map_primer_err)
}

/// Forward primer over nucleotides `[start, start + length - 1]` of `seq`.
#[pyfunction]
#[pyo3(signature = (seq, recognition_site, start, length, overhang, auto_add_start_codon))]
fn find_forward(
    seq: &str,
    recognition_site: &str,
    start: i64,
    length: i64,
    overhang: i64,
    auto_add_start_codon: bool,
) -> PyResult<String> {
    design(
        Strand::Forward,
        seq,
        recognition_site,
        start,
        length,
        overhang,
        auto_add_start_codon,
    )
}

/// Reverse primer over nucleotides `[start, start + length - 1]` of the
/// reverse complement of `seq`.
#[pyfunction]
#[pyo3(signature = (seq, recognition_site, start, length, overhang, auto_add_stop_codon))]
fn find_reverse(
    seq: &str,
    recognition_site: &str,
    start: i64,
    length: i64,
    overhang: i64,
    auto_add_stop_codon: bool,
) -> PyResult<String> {
    design(
        Strand::Reverse,
        seq,
        recognition_site,
        start,
        length,
        overhang,
        auto_add_stop_codon,
    )
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(find_forward, m)?)?;
    m.add_function(wrap_pyfunction!(find_reverse, m)?)?;
    Ok(())
}
