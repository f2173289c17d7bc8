//! Writer für das flache Pfad-Format.

use crate::app::FilterOutput;
use crate::core::Path;
use std::fmt::Write as _;
use std::io::Write;

/// Ab diesen Beträgen wird ohne feste Nachkommastellen in Exponentenform geschrieben.
const PLAIN_RANGE: std::ops::Range<f64> = 1e-5..1e16;

/// Formatiert eine Koordinate.
///
/// Ohne `precision` die kürzeste Darstellung, die beim Einlesen wieder exakt
/// denselben Wert ergibt; sehr große und sehr kleine Beträge als `1e300`,
/// damit jede Zeile kurz bleibt.
fn format_value(out: &mut String, value: f64, precision: Option<usize>) {
    // fmt::Write auf String ist unfehlbar
    let _ = match precision {
        Some(digits) => writeln!(out, "{:.*}", digits, value),
        None if value != 0.0 && !PLAIN_RANGE.contains(&value.abs()) => {
            writeln!(out, "{:e}", value)
        }
        None => writeln!(out, "{}", value),
    };
}

/// Rendert den Pfad als Text, eine Koordinate pro Zeile.
pub fn render_path(path: &Path, precision: Option<usize>) -> String {
    let mut output = String::with_capacity(path.shape().value_count() * 12);
    for value in path.flat_values() {
        format_value(&mut output, value, precision);
    }
    output
}

/// Schreibt eine fertig gerenderte Ausgabe in `writer`.
pub fn write_output<W: Write>(writer: &mut W, output: &FilterOutput) -> std::io::Result<()> {
    writer.write_all(output.text.as_bytes())
}
