//! Text-Protokoll zum String-Treiber.
//!
//! Eingabe: Kopfzeile `"<numpoints> <numcvs>"`, danach eine Koordinate pro Zeile
//! (Punkt-major: alle CVs von Punkt 0, dann Punkt 1, ...).
//! Ausgabe: dieselbe flache Reihenfolge, eine Zahl pro Zeile.

pub mod parser;
pub mod writer;

pub use parser::{parse_header, parse_path, read_header, read_path, read_points};
pub use writer::{render_path, write_output};
