#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::dna::DNA;
use crate::utils::map_primer_err;
use cloningprimer_core::enzyme::{EnzymeTable, RestrictionEnzyme};
use cloningprimer_core::io;

#[pyclass(frozen)]
pub struct Enzyme {
    pub(crate) inner: RestrictionEnzyme,
}

#[pymethods]
impl Enzyme {
    #[new]
    fn new(name: &str, recognition_site: &str) -> Self {
        Self {
            inner: RestrictionEnzyme::new(name, recognition_site),
        }
    }

    #[getter]
    fn name(&self) -> &str {
        &self.inner.name
    }

    #[getter]
    fn recognition_site(&self) -> &str {
        &self.inner.recognition_site
    }

    #[getter]
    fn no_palindromic_cleavage(&self) -> &str {
        &self.inner.no_palindromic_cleavage
    }

    #[getter]
    fn id(&self) -> &str {
        &self.inner.id
    }

    #[getter]
    fn isoschizomeres(&self) -> Vec<String> {
        self.inner.isoschizomeres.clone()
    }

    fn __repr__(&self) -> String {
        format!(
            "Enzyme(name={:?}, recognition_site={:?})",
            self.inner.name, self.inner.recognition_site
        )
    }
}

/// Read-only mapping from enzyme name to [`Enzyme`].
#[pyclass(frozen)]
pub struct Enzymes {
    pub(crate) inner: EnzymeTable,
}

#[pymethods]
impl Enzymes {
    fn get(&self, name: &str) -> Option<Enzyme> {
        self.inner.get(name).map(|e| Enzyme { inner: e.clone() })
    }

    fn names(&self) -> Vec<String> {
        self.inner.names().map(str::to_string).collect()
    }

    /// Enzymes whose name matches the regular expression `query.*`,
    /// ignoring case.
    fn filter(&self, query: &str) -> PyResult<Self> {
        let inner = self.inner.filter(query).map_err(map_primer_err)?;
        Ok(Self { inner })
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __contains__(&self, name: &str) -> bool {
        self.inner.contains(name)
    }

    fn __getitem__(&self, name: &str) -> PyResult<Enzyme> {
        self.get(name)
            .ok_or_else(|| pyo3::exceptions::PyKeyError::new_err(name.to_string()))
    }

    fn __repr__(&self) -> String {
        format!("Enzymes(n={})", self.inner.len())
    }
}

#[pyfunction]
fn read_enzymes(path: &str) -> PyResult<Enzymes> {
    let inner = io::read_enzymes_from_path(path).map_err(map_primer_err)?;
    Ok(Enzymes { inner })
}

#[pyfunction]
fn parse_enzymes(data: &[u8]) -> Enzymes {
    Enzymes {
        inner: io::read_enzymes_from_bytes(data),
    }
}

#[pyfunction]
fn filter_enzymes(enzymes: PyRef<'_, Enzymes>, query: &str) -> PyResult<Enzymes> {
    enzymes.filter(query)
}

#[pyfunction]
fn read_sequence(path: &str) -> PyResult<DNA> {
    let inner = io::read_sequence_from_path(path).map_err(map_primer_err)?;
    Ok(DNA { inner })
}

#[pyfunction]
fn parse_sequence(data: &[u8]) -> PyResult<DNA> {
    let inner = io::read_sequence_from_bytes(data).map_err(map_primer_err)?;
    Ok(DNA { inner })
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Enzyme>()?;
    m.add_class::<Enzymes>()?;
    m.add_function(wrap_pyfunction!(read_enzymes, m)?)?;
    m.add_function(wrap_pyfunction!(parse_enzymes, m)?)?;
    m.add_function(wrap_pyfunction!(filter_enzymes, m)?)?;
    m.add_function(wrap_pyfunction!(read_sequence, m)?)?;
    m.add_function(wrap_pyfunction!(parse_sequence, m)?)?;
    Ok(())
}
