use pyo3::prelude::*;

mod dna;
mod enzyme;
mod primer;
mod stats;
mod utils;

#[pymodule]
fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    dna::register(m)?;
    enzyme::register(m)?;
    primer::register(m)?;
    stats::register(m)?;
    Ok(())
}
