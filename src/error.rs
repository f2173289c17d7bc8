//! Fehlertypen der Reparametrisierung.

use thiserror::Error;

/// Alle fatalen Fehler eines Reparametrisierungs-Laufs.
///
/// Ein fataler Fehler bricht den Lauf ab, bevor irgendeine Ausgabe entsteht.
/// Richtungen zwischen identischen Punkten sind kein Fehler; sie werden über
/// `ReparamReport` gemeldet.
#[derive(Debug, Error)]
pub enum ReparamError {
    /// Kopfzeile liefert nicht genau zwei nicht-negative Ganzzahlen.
    #[error("Kopfzeile {line:?} enthaelt nicht genau zwei Ganzzahlen (Punkte, CVs)")]
    HeaderParse { line: String },

    /// Kopfzeile ist lesbar, beschreibt aber keinen verwendbaren Pfad.
    #[error("Ungueltige Pfadgroesse: {numpoints} Punkte mit je {numcvs} CVs")]
    InvalidShape { numpoints: usize, numcvs: usize },

    /// Ein Punkt hat eine andere Dimension als der erste Punkt des Pfads.
    #[error("Punkt {index} hat {found} CVs, erwartet wurden {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// Koordinatenzeile ist keine endliche Gleitkommazahl.
    #[error("Zeile {line_no} (Punkt {point}, CV {cv}): {text:?} ist keine gueltige Koordinate")]
    CoordinateParse {
        line_no: usize,
        point: usize,
        cv: usize,
        text: String,
    },

    /// Eingabe endet, bevor alle Koordinaten gelesen wurden.
    #[error("Eingabe endet nach {found} von {expected} Koordinaten")]
    MissingCoordinates { expected: usize, found: usize },

    /// Kein Segment umschliesst die Ziel-Bogenlaenge (z.B. Pfad der Laenge 0).
    #[error(
        "Kein Segment fuer Ziel-Bogenlaenge {target} gefunden (Gesamtlaenge {total}); \
         fallen alle Pfadpunkte zusammen?"
    )]
    SegmentNotFound { target: f64, total: f64 },

    /// Bogenlänge oder Ergebnis nicht mehr als endliche Zahl darstellbar.
    #[error("Nicht endliches Ergebnis: Gesamtlaenge {total}, Koordinaten ausserhalb des f64-Bereichs")]
    NonFinite { total: f64 },

    #[error("I/O-Fehler: {0}")]
    Io(#[from] std::io::Error),
}
