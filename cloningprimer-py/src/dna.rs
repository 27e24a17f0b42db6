#![allow(clippy::useless_conversion)]

use pyo3::basic::CompareOp;
use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyModule, PyString};

use crate::utils::{self, map_primer_err};
use cloningprimer_core::alphabets::dna;
use cloningprimer_core::seq::codon;
use cloningprimer_core::seq::overhang::Placement;
use cloningprimer_core::seq::DnaSeq;

#[allow(clippy::upper_case_acronyms)]
#[pyclass(frozen)]
pub struct DNA {
    pub(crate) inner: DnaSeq,
}

#[pymethods]
impl DNA {
    #[new]
    fn new(seq: &Bound<'_, PyAny>) -> PyResult<Self> {
        let bytes: Vec<u8> = if let Ok(s) = seq.downcast::<PyString>() {
            s.to_str()?.as_bytes().to_vec()
        } else {
            seq.extract::<Vec<u8>>()
                .map_err(|_| PyValueError::new_err("DNA() expects str or bytes-like input"))?
        };

        let inner = DnaSeq::new(bytes).map_err(map_primer_err)?;
        Ok(Self { inner })
    }

    /// Builds a sequence from free text, dropping blanks.
    #[staticmethod]
    fn normalized(text: &str) -> PyResult<Self> {
        let inner = DnaSeq::normalized(text).map_err(map_primer_err)?;
        Ok(Self { inner })
    }

    fn reverse_complement(&self) -> PyResult<Self> {
        let inner = self.inner.reverse_complement().map_err(map_primer_err)?;
        Ok(Self { inner })
    }

    /// 1-based closed window, `None` when it does not fit.
    fn window(&self, start: usize, length: usize) -> Option<String> {
        self.inner.window(start, length).map(str::to_string)
    }

    fn __contains__(&self, sub: &Bound<'_, PyAny>) -> PyResult<bool> {
        let needle = utils::extract_bytes(sub)?;
        Ok(self.inner.contains(&needle))
    }

    #[inline]
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.inner.as_bytes()
    }

    fn to_bytes<'py>(&self, py: Python<'py>) -> Bound<'py, PyBytes> {
        PyBytes::new_bound(py, self.as_bytes())
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __richcmp__(&self, other: &Bound<'_, PyAny>, op: CompareOp) -> PyResult<bool> {
        let other = utils::extract_bytes(other)
            .map_err(|_| PyTypeError::new_err("expected DNA, str, or bytes-like object"))?;

        match op {
            CompareOp::Eq => Ok(self.as_bytes() == other.as_slice()),
            CompareOp::Ne => Ok(self.as_bytes() != other.as_slice()),
            CompareOp::Lt => Ok(self.as_bytes() < other.as_slice()),
            CompareOp::Le => Ok(self.as_bytes() <= other.as_slice()),
            CompareOp::Gt => Ok(self.as_bytes() > other.as_slice()),
            CompareOp::Ge => Ok(self.as_bytes() >= other.as_slice()),
        }
    }

    fn __bytes__<'py>(&self, py: Python<'py>) -> Bound<'py, PyBytes> {
        PyBytes::new_bound(py, self.as_bytes())
    }

    fn __str__(&self) -> &str {
        self.inner.as_str()
    }

    fn __repr__(&self) -> String {
        format!("DNA({:?})", self.inner.as_str())
    }
}

#[pyfunction]
fn is_nucleotide(nucleotide: &Bound<'_, PyAny>) -> PyResult<bool> {
    Ok(dna::is_nucleotide(utils::extract_byte(nucleotide)?))
}

#[pyfunction]
fn complement(nucleotide: &Bound<'_, PyAny>) -> PyResult<String> {
    let b = dna::complement(utils::extract_byte(nucleotide)?).map_err(map_primer_err)?;
    Ok((b as char).to_string())
}

#[pyfunction]
fn reverse(seq: &str) -> String {
    dna::reverse(seq)
}

#[pyfunction]
fn normalize(text: &Bound<'_, PyAny>) -> PyResult<String> {
    dna::normalize(&utils::extract_bytes(text)?).map_err(map_primer_err)
}

#[pyfunction]
#[pyo3(signature = (seq, exact=true))]
fn has_start_codon(seq: &Bound<'_, PyAny>, exact: bool) -> PyResult<bool> {
    Ok(codon::has_start_codon(utils::extract_bytes(seq)?, exact))
}

#[pyfunction]
#[pyo3(signature = (seq, exact=true))]
fn has_stop_codon_ochre(seq: &Bound<'_, PyAny>, exact: bool) -> PyResult<bool> {
    Ok(codon::has_stop_codon_ochre(utils::extract_bytes(seq)?, exact))
}

#[pyfunction]
#[pyo3(signature = (seq, exact=true))]
fn has_stop_codon_amber(seq: &Bound<'_, PyAny>, exact: bool) -> PyResult<bool> {
    Ok(codon::has_stop_codon_amber(utils::extract_bytes(seq)?, exact))
}

#[pyfunction]
#[pyo3(signature = (seq, exact=true))]
fn has_stop_codon_opal(seq: &Bound<'_, PyAny>, exact: bool) -> PyResult<bool> {
    Ok(codon::has_stop_codon_opal(utils::extract_bytes(seq)?, exact))
}

#[pyfunction]
#[pyo3(signature = (seq, exact=true))]
fn has_stop_codon(seq: &Bound<'_, PyAny>, exact: bool) -> PyResult<bool> {
    Ok(codon::has_stop_codon(utils::extract_bytes(seq)?, exact))
}

#[pyfunction]
fn overhang(n: usize) -> String {
    cloningprimer_core::seq::overhang::overhang(n)
}

#[pyfunction]
#[pyo3(signature = (seq, n, back=false))]
fn add_overhang(seq: &str, n: usize, back: bool) -> String {
    let placement = if back { Placement::Back } else { Placement::Front };
    cloningprimer_core::seq::overhang::add_overhang(seq, n, placement)
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<DNA>()?;
    m.add_function(wrap_pyfunction!(is_nucleotide, m)?)?;
    m.add_function(wrap_pyfunction!(complement, m)?)?;
    m.add_function(wrap_pyfunction!(reverse, m)?)?;
    m.add_function(wrap_pyfunction!(normalize, m)?)?;
    m.add_function(wrap_pyfunction!(has_start_codon, m)?)?;
    m.add_function(wrap_pyfunction!(has_stop_codon_ochre, m)?)?;
    m.add_function(wrap_pyfunction!(has_stop_codon_amber, m)?)?;
    m.add_function(wrap_pyfunction!(has_stop_codon_opal, m)?)?;
    m.add_function(wrap_pyfunction!(has_stop_codon, m)?)?;
    m.add_function(wrap_pyfunction!(overhang, m)?)?;
    m.add_function(wrap_pyfunction!(add_overhang, m)?)?;
    Ok(())
}
