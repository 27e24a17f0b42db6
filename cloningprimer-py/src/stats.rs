use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::utils::map_primer_err;
use cloningprimer_core::stats;

#[pyfunction]
fn gc_content(primer: &str) -> PyResult<f64> {
    stats::gc_content(primer).map_err(map_primer_err)
}

#[pyfunction]
#[pyo3(signature = (primer, complementary=0))]
fn melting_temperature(primer: &str, complementary: isize) -> PyResult<f64> {
    stats::melting_temperature(primer, complementary).map_err(map_primer_err)
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(gc_content, m)?)?;
    m.add_function(wrap_pyfunction!(melting_temperature, m)?)?;
    Ok(())
}
