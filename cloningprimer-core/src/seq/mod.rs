pub mod codon;
pub mod dna;
pub mod overhang;

pub use dna::DnaSeq;
pub use overhang::Placement;
