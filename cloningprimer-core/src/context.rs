//! Application context: the enzyme table loaded once at startup, plus the
//! named inputs of a primer design request.

use crate::enzyme::{EnzymeTable, RestrictionEnzyme};
use crate::error::{PrimerError, PrimerResult};
use crate::io::{read_enzymes_from_path, read_sequence_from_path};
use crate::primer::{design_primer, Primer, PrimerParams, Strand};
use crate::seq::DnaSeq;

use log::{debug, info};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const ENZYME_FILE_VAR: &str = "CLONINGPRIMER_ENZYME_FILE";
pub const SEQUENCE_FILE_VAR: &str = "CLONINGPRIMER_SEQUENCE_FILE";
pub const DEFAULT_ENZYME_FILE: &str = "assets/enzymes.re";

/// Whether the input sequence already carries the start (forward) or stop
/// (reverse) codon. Parsed from the `"yes"` / `"no"` form values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CodonFlag {
    Present,
    Absent,
}

impl CodonFlag {
    /// A missing codon is inserted automatically.
    pub fn auto_add(self) -> bool {
        self == CodonFlag::Absent
    }
}

impl From<bool> for CodonFlag {
    fn from(present: bool) -> Self {
        if present {
            CodonFlag::Present
        } else {
            CodonFlag::Absent
        }
    }
}

impl FromStr for CodonFlag {
    type Err = PrimerError;

    fn from_str(s: &str) -> PrimerResult<Self> {
        match s {
            "yes" => Ok(CodonFlag::Present),
            "no" => Ok(CodonFlag::Absent),
            other => Err(PrimerError::InvalidCodonFlag {
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DesignDefaults {
    pub forward_start: usize,
    pub reverse_start: usize,
    pub length: usize,
    pub overhang: usize,
    pub start_codon: CodonFlag,
    pub stop_codon: CodonFlag,
}

impl Default for DesignDefaults {
    fn default() -> Self {
        Self {
            forward_start: 1,
            reverse_start: 1,
            length: 18,
            overhang: 4,
            start_codon: CodonFlag::Present,
            stop_codon: CodonFlag::Present,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub enzyme_file: PathBuf,
    pub sequence_file: Option<PathBuf>,
    pub defaults: DesignDefaults,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            enzyme_file: PathBuf::from(DEFAULT_ENZYME_FILE),
            sequence_file: None,
            defaults: DesignDefaults::default(),
        }
    }
}

impl AppConfig {
    /// Defaults overlaid with `CLONINGPRIMER_ENZYME_FILE` and
    /// `CLONINGPRIMER_SEQUENCE_FILE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(path) = lookup(ENZYME_FILE_VAR).filter(|p| !p.is_empty()) {
            config.enzyme_file = PathBuf::from(path);
        }
        if let Some(path) = lookup(SEQUENCE_FILE_VAR).filter(|p| !p.is_empty()) {
            config.sequence_file = Some(PathBuf::from(path));
        }
        config
    }
}

/// Named inputs for one forward/reverse primer pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DesignRequest {
    /// Free text; blanks are dropped before design.
    pub sequence: String,
    pub forward_enzyme: String,
    pub reverse_enzyme: String,
    pub forward_length: usize,
    pub reverse_length: usize,
    pub forward_overhang: usize,
    pub reverse_overhang: usize,
    pub start_codon: CodonFlag,
    pub stop_codon: CodonFlag,
    pub forward_start: Option<usize>,
    pub reverse_start: Option<usize>,
}

impl DesignRequest {
    pub fn new(
        sequence: impl Into<String>,
        forward_enzyme: impl Into<String>,
        reverse_enzyme: impl Into<String>,
        defaults: &DesignDefaults,
    ) -> Self {
        Self {
            sequence: sequence.into(),
            forward_enzyme: forward_enzyme.into(),
            reverse_enzyme: reverse_enzyme.into(),
            forward_length: defaults.length,
            reverse_length: defaults.length,
            forward_overhang: defaults.overhang,
            reverse_overhang: defaults.overhang,
            start_codon: defaults.start_codon,
            stop_codon: defaults.stop_codon,
            forward_start: Some(defaults.forward_start),
            reverse_start: Some(defaults.reverse_start),
        }
    }

    fn params(&self, strand: Strand) -> PrimerParams {
        match strand {
            Strand::Forward => PrimerParams::new(
                self.forward_start.unwrap_or(1),
                self.forward_length,
                self.forward_overhang,
                self.start_codon.auto_add(),
            ),
            Strand::Reverse => PrimerParams::new(
                self.reverse_start.unwrap_or(1),
                self.reverse_length,
                self.reverse_overhang,
                self.stop_codon.auto_add(),
            ),
        }
    }

    fn enzyme(&self, strand: Strand) -> &str {
        match strand {
            Strand::Forward => &self.forward_enzyme,
            Strand::Reverse => &self.reverse_enzyme,
        }
    }
}

/// Each side fails on its own, so one bad enzyme name still yields the
/// other primer.
#[derive(Debug)]
pub struct Design {
    pub sequence: DnaSeq,
    pub forward: PrimerResult<Primer>,
    pub reverse: PrimerResult<Primer>,
}

#[derive(Clone, Debug, Default)]
pub struct AppContext {
    enzymes: EnzymeTable,
    sequence: Option<DnaSeq>,
    defaults: DesignDefaults,
}

impl AppContext {
    pub fn new(enzymes: EnzymeTable) -> Self {
        Self {
            enzymes,
            ..Self::default()
        }
    }

    pub fn load(config: &AppConfig) -> PrimerResult<Self> {
        let enzymes = read_enzymes_from_path(&config.enzyme_file)?;
        let sequence = config
            .sequence_file
            .as_ref()
            .map(read_sequence_from_path)
            .transpose()?;
        info!(
            "context ready: {} enzymes, sequence {}",
            enzymes.len(),
            if sequence.is_some() { "loaded" } else { "not set" }
        );
        Ok(Self {
            enzymes,
            sequence,
            defaults: config.defaults,
        })
    }

    pub fn enzymes(&self) -> &EnzymeTable {
        &self.enzymes
    }

    pub fn sequence(&self) -> Option<&DnaSeq> {
        self.sequence.as_ref()
    }

    pub fn defaults(&self) -> &DesignDefaults {
        &self.defaults
    }

    /// Request over the loaded sequence with the configured defaults.
    pub fn request(&self, forward_enzyme: &str, reverse_enzyme: &str) -> Option<DesignRequest> {
        let seq = self.sequence.as_ref()?;
        Some(DesignRequest::new(
            seq.as_str(),
            forward_enzyme,
            reverse_enzyme,
            &self.defaults,
        ))
    }

    /// Exact name first, then the case-insensitive filter, which must match
    /// exactly one enzyme.
    pub fn resolve_enzyme(&self, query: &str) -> PrimerResult<&RestrictionEnzyme> {
        if let Some(enzyme) = self.enzymes.get(query) {
            return Ok(enzyme);
        }
        let matches = self.enzymes.filter(query)?;
        let mut names = matches.names();
        match (names.next(), names.next()) {
            (Some(name), None) => {
                debug!("'{query}' resolved to {name}");
                self.enzymes
                    .get(name)
                    .ok_or_else(|| PrimerError::UnknownEnzyme {
                        query: query.to_string(),
                    })
            }
            (None, _) => Err(PrimerError::UnknownEnzyme {
                query: query.to_string(),
            }),
            (Some(_), Some(_)) => Err(PrimerError::AmbiguousEnzyme {
                query: query.to_string(),
                matches: matches.names().map(str::to_string).collect(),
            }),
        }
    }

    fn design_side(
        &self,
        strand: Strand,
        seq: &DnaSeq,
        request: &DesignRequest,
    ) -> PrimerResult<Primer> {
        let enzyme = self.resolve_enzyme(request.enzyme(strand))?;
        design_primer(
            strand,
            seq.as_str(),
            &enzyme.recognition_site,
            &request.params(strand),
        )
    }

    /// Fails as a whole only when the sequence text holds a non-nucleotide.
    pub fn design(&self, request: &DesignRequest) -> PrimerResult<Design> {
        let sequence = DnaSeq::normalized(&request.sequence)?;
        let forward = self.design_side(Strand::Forward, &sequence, request);
        let reverse = self.design_side(Strand::Reverse, &sequence, request);
        Ok(Design {
            sequence,
            forward,
            reverse,
        })
    }

    /// Requests are independent and run in parallel with the `parallel`
    /// feature.
    pub fn design_many(&self, requests: &[DesignRequest]) -> Vec<PrimerResult<Design>> {
        par_map!(requests, |request| self.design(request))
    }
}
