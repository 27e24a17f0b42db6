//! Reader for `*.re` restriction enzyme files.
//!
//! Every line that starts with a single quote not followed by `*` is a
//! record; all other lines (including `'*` comment lines) are skipped. A
//! record holds up to five quoted fields, in order: name, recognition site,
//! cleavage annotation, id and a comma separated list of isoschizomeres.
//!
//! ```text
//! '* name    site      cleavage  id   isoschizomeres
//! 'EcoRI'   'GAATTC'  '(1/5)'   '1'  'FunII,MfoAI'
//! ```

use crate::enzyme::{EnzymeTable, RestrictionEnzyme};
use crate::error::PrimerResult;
use crate::io::{read_input, FileFormat};

use log::{debug, info};
use std::path::Path;

const QUOTE: u8 = b'\'';
const COMMENT: u8 = b'*';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// At the start of a line, deciding whether it holds a record.
    AwaitingRecordStart,
    InsideField,
    BetweenFields,
    SkippingComment,
}

struct RecordParser {
    state: State,
    column: usize,
    field: Vec<u8>,
    current: Option<RestrictionEnzyme>,
    table: EnzymeTable,
}

impl RecordParser {
    fn new() -> Self {
        Self {
            state: State::AwaitingRecordStart,
            column: 0,
            field: Vec::new(),
            current: None,
            table: EnzymeTable::new(),
        }
    }

    fn step(&mut self, b: u8, next: Option<u8>) {
        if b == b'\n' {
            if self.state == State::InsideField {
                debug!("unterminated field dropped at end of line");
            }
            self.field.clear();
            self.state = State::AwaitingRecordStart;
            return;
        }

        self.state = match self.state {
            State::AwaitingRecordStart if b == QUOTE && next != Some(COMMENT) => {
                self.commit();
                self.current = Some(RestrictionEnzyme::default());
                self.column = 0;
                State::InsideField
            }
            State::AwaitingRecordStart => State::SkippingComment,
            State::SkippingComment => State::SkippingComment,
            State::BetweenFields if b == QUOTE => State::InsideField,
            State::BetweenFields => State::BetweenFields,
            State::InsideField if b == QUOTE => {
                self.store_field();
                self.column += 1;
                State::BetweenFields
            }
            State::InsideField => {
                self.field.push(b);
                State::InsideField
            }
        };
    }

    fn store_field(&mut self) {
        let value = String::from_utf8_lossy(&self.field).into_owned();
        self.field.clear();
        let Some(enzyme) = self.current.as_mut() else {
            return;
        };
        match self.column {
            0 => enzyme.name = value,
            1 => enzyme.recognition_site = value,
            2 => enzyme.no_palindromic_cleavage = value,
            3 => enzyme.id = value,
            4 if value.is_empty() => enzyme.isoschizomeres.clear(),
            4 => enzyme.isoschizomeres = value.split(',').map(str::to_string).collect(),
            _ => {}
        }
    }

    fn commit(&mut self) {
        if let Some(enzyme) = self.current.take() {
            if enzyme.name.is_empty() {
                debug!("record without a name skipped");
                return;
            }
            self.table.insert_first(enzyme);
        }
    }

    fn finish(mut self) -> EnzymeTable {
        self.field.clear();
        self.commit();
        self.table
    }
}

/// Parses enzyme records from an in-memory `*.re` file. The record still in
/// progress at end of input is kept.
pub fn read_enzymes_from_bytes(data: &[u8]) -> EnzymeTable {
    let mut parser = RecordParser::new();
    for (i, &b) in data.iter().enumerate() {
        parser.step(b, data.get(i + 1).copied());
    }
    parser.finish()
}

pub fn read_enzymes_from_path(path: impl AsRef<Path>) -> PrimerResult<EnzymeTable> {
    let path = path.as_ref();
    let data = read_input(path, FileFormat::Enzymes)?;
    let table = read_enzymes_from_bytes(&data);
    info!("parsed {} enzymes from '{}'", table.len(), path.display());
    Ok(table)
}
