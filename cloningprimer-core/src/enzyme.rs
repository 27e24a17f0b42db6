use crate::error::PrimerResult;

use log::warn;
use regex::RegexBuilder;
use std::collections::btree_map::{self, BTreeMap};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RestrictionEnzyme {
    /// e.g. `EcoRI`
    pub name: String,
    /// e.g. `GAATTC`
    pub recognition_site: String,
    /// Cleavage-offset annotation, kept verbatim.
    pub no_palindromic_cleavage: String,
    pub id: String,
    pub isoschizomeres: Vec<String>,
}

impl RestrictionEnzyme {
    pub fn new(name: impl Into<String>, recognition_site: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            recognition_site: recognition_site.into(),
            ..Self::default()
        }
    }
}

/// Enzymes keyed by name. Built once and only read afterwards; the first
/// record with a given name wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnzymeTable {
    enzymes: BTreeMap<String, RestrictionEnzyme>,
}

impl EnzymeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `enzyme` unless its name is already present. Returns whether it
    /// was added.
    pub(crate) fn insert_first(&mut self, enzyme: RestrictionEnzyme) -> bool {
        match self.enzymes.entry(enzyme.name.clone()) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(enzyme);
                true
            }
            btree_map::Entry::Occupied(_) => {
                warn!("duplicate enzyme '{}' ignored, keeping the first record", enzyme.name);
                false
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&RestrictionEnzyme> {
        self.enzymes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.enzymes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.enzymes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enzymes.is_empty()
    }

    /// Names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.enzymes.keys().map(String::as_str)
    }

    /// Copy holding the enzymes whose name matches `query` followed by
    /// anything, case-insensitively. `query` is a regular-expression fragment,
    /// so an empty query keeps every enzyme.
    pub fn filter(&self, query: &str) -> PrimerResult<EnzymeTable> {
        let pattern = RegexBuilder::new(&format!("{query}.*"))
            .case_insensitive(true)
            .build()?;
        let enzymes = self
            .enzymes
            .iter()
            .filter(|(name, _)| pattern.is_match(name))
            .map(|(name, enzyme)| (name.clone(), enzyme.clone()))
            .collect();
        Ok(EnzymeTable { enzymes })
    }
}

impl FromIterator<RestrictionEnzyme> for EnzymeTable {
    fn from_iter<T: IntoIterator<Item = RestrictionEnzyme>>(iter: T) -> Self {
        let mut table = EnzymeTable::new();
        for enzyme in iter {
            table.insert_first(enzyme);
        }
        table
    }
}

pub fn filter_enzyme_map(table: &EnzymeTable, query: &str) -> PrimerResult<EnzymeTable> {
    table.filter(query)
}
