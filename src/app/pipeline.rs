//! Linearer Ablauf eines `rep`-Laufs.
//!
//! Alle Eingaben werden vollständig gelesen, bevor gerechnet wird, und die
//! Ausgabe entsteht erst nach Abschluss der Berechnung. Bei einem Fehler
//! wird nichts ausgegeben.

use crate::error::ReparamError;
use crate::io::{read_header, read_points, render_path};
use crate::reparam::{reparametrize, ReparamReport};
use crate::shared::ReparamOptions;
use std::io::BufRead;

/// Stufen eines Laufs, strikt in dieser Reihenfolge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ReadingHeader,
    ReadingPoints,
    Reparametrizing,
    Emitting,
    Done,
}

/// Fertig gerenderte Ausgabe plus Diagnosen.
#[derive(Debug, Clone)]
pub struct FilterOutput {
    pub text: String,
    pub report: ReparamReport,
}

fn enter(stage: Stage) {
    log::debug!("Stufe: {:?}", stage);
}

/// Liest einen Pfad aus `input`, reparametrisiert ihn und rendert das Ergebnis.
///
/// Der Aufrufer schreibt `FilterOutput::text` unverändert nach stdout.
pub fn run_filter<R: BufRead>(
    input: R,
    options: &ReparamOptions,
) -> Result<FilterOutput, ReparamError> {
    let mut lines = input.lines();

    enter(Stage::ReadingHeader);
    let shape = read_header(&mut lines)?;

    enter(Stage::ReadingPoints);
    let path = read_points(&mut lines, shape)?;

    enter(Stage::Reparametrizing);
    let result = reparametrize(&path, options)?;

    enter(Stage::Emitting);
    let text = render_path(&result.path, options.output_precision);

    enter(Stage::Done);
    Ok(FilterOutput {
        text,
        report: result.report,
    })
}
