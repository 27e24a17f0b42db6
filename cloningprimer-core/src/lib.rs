#[macro_use]
mod par;

pub mod alphabets;
pub mod context;
pub mod enzyme;
pub mod error;
pub mod io;
pub mod primer;
pub mod seq;
pub mod stats;

pub use context::{AppConfig, AppContext, CodonFlag, Design, DesignDefaults, DesignRequest};
pub use enzyme::{filter_enzyme_map, EnzymeTable, RestrictionEnzyme};
pub use error::{PrimerError, PrimerResult};
pub use primer::{design_primer, find_forward, find_reverse, Primer, PrimerParams, Strand};
pub use seq::DnaSeq;
pub use stats::{gc_content, melting_temperature};
