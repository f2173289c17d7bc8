//! Parser für das flache Pfad-Format.

use crate::core::{Path, PathShape};
use crate::error::ReparamError;
use std::io::BufRead;

/// Liest die Kopfzeile `"<numpoints> <numcvs>"`.
///
/// Genau zwei nicht-negative Ganzzahlen, getrennt durch Whitespace.
pub fn parse_header(line: &str) -> Result<PathShape, ReparamError> {
    let header_error = || ReparamError::HeaderParse {
        line: line.trim_end().to_string(),
    };

    let mut fields = line.split_whitespace();
    let (Some(points_raw), Some(cvs_raw), None) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(header_error());
    };

    let numpoints = points_raw.parse::<usize>().map_err(|_| header_error())?;
    let numcvs = cvs_raw.parse::<usize>().map_err(|_| header_error())?;

    PathShape::new(numpoints, numcvs)
}

/// Liest eine Koordinate. Nur endliche Werte sind gültig.
fn parse_coordinate(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Liest die Kopfzeile aus einem Zeilen-Iterator.
pub fn read_header<I>(lines: &mut I) -> Result<PathShape, ReparamError>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    let header = lines.next().transpose()?.unwrap_or_default();
    let shape = parse_header(&header)?;
    log::debug!(
        "Kopfzeile gelesen: {} Punkte, {} CVs",
        shape.numpoints,
        shape.numcvs
    );
    Ok(shape)
}

/// Liest alle `numpoints * numcvs` Koordinaten, eine pro Zeile.
///
/// Überzählige Zeilen nach der letzten Koordinate werden nicht gelesen.
pub fn read_points<I>(lines: &mut I, shape: PathShape) -> Result<Path, ReparamError>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    let expected = shape.value_count();
    let mut values = Vec::new();

    for index in 0..expected {
        let Some(line) = lines.next().transpose()? else {
            return Err(ReparamError::MissingCoordinates {
                expected,
                found: index,
            });
        };

        let value = parse_coordinate(&line).ok_or_else(|| ReparamError::CoordinateParse {
            line_no: index + 2,
            point: index / shape.numcvs,
            cv: index % shape.numcvs,
            text: line.trim_end().to_string(),
        })?;
        values.push(value);
    }

    Path::from_flat(shape, &values)
}

/// Liest Kopfzeile und Koordinaten aus `reader`.
pub fn read_path<R: BufRead>(reader: R) -> Result<Path, ReparamError> {
    let mut lines = reader.lines();
    let shape = read_header(&mut lines)?;
    read_points(&mut lines, shape)
}

/// Parsed einen Pfad aus einem String.
pub fn parse_path(text: &str) -> Result<Path, ReparamError> {
    read_path(text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header() {
        assert_eq!(
            parse_header("3 1\n").unwrap(),
            PathShape {
                numpoints: 3,
                numcvs: 1
            }
        );
        assert_eq!(parse_header("  12\t4  ").unwrap().value_count(), 48);
    }

    #[test]
    fn test_parse_header_rejects_garbage() {
        for line in ["abc", "", "3", "3 1 2", "-3 1", "3 1.5", "3 x"] {
            let err = parse_header(line).expect_err(line);
            assert!(matches!(err, ReparamError::HeaderParse { .. }), "{line}: {err}");
        }
    }

    #[test]
    fn test_parse_header_rejects_zero_sizes() {
        assert!(matches!(
            parse_header("0 2"),
            Err(ReparamError::InvalidShape { numpoints: 0, .. })
        ));
        assert!(matches!(
            parse_header("4 0"),
            Err(ReparamError::InvalidShape { numcvs: 0, .. })
        ));
    }

    #[test]
    fn test_parse_path_point_major() {
        let path = parse_path("2 2\n1.0\n2.0\n 3.5 \r\n-4e1\n").unwrap();
        assert_eq!(path.points()[0].coords(), &[1.0, 2.0]);
        assert_eq!(path.points()[1].coords(), &[3.5, -40.0]);
    }

    #[test]
    fn test_parse_path_ignores_trailing_lines() {
        let path = parse_path("1 2\n1\n2\n3\nrest\n").unwrap();
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_malformed_coordinate_is_fatal() {
        let err = parse_path("2 2\n1.0\n2.0\noops\n4.0\n").expect_err("oops ist keine Zahl");
        match err {
            ReparamError::CoordinateParse {
                line_no,
                point,
                cv,
                text,
            } => {
                assert_eq!((line_no, point, cv), (4, 1, 0));
                assert_eq!(text, "oops");
            }
            other => panic!("Unerwarteter Fehler: {other}"),
        }
    }

    #[test]
    fn test_non_finite_coordinate_is_fatal() {
        assert!(parse_path("1 1\nNaN\n").is_err());
        assert!(parse_path("1 1\ninf\n").is_err());
    }

    #[test]
    fn test_missing_coordinates() {
        let err = parse_path("3 1\n1\n2\n").expect_err("Eine Zeile fehlt");
        assert!(matches!(
            err,
            ReparamError::MissingCoordinates {
                expected: 3,
                found: 2
            }
        ));
    }
}
