//! Richtungsvektoren zwischen zwei Punkten und Schritte entlang dieser Richtung.

use super::distance;
use crate::core::Point;

/// Normierte Richtung von `a` nach `b`.
#[derive(Debug, Clone, PartialEq)]
pub struct Direction {
    pub unit: Point,
    /// `true`, wenn `a == b` und statt 0 das Epsilon als Nenner verwendet wurde.
    pub degenerate: bool,
}

/// `(b - a) / |b - a|`, koordinatenweise.
///
/// Bei Abstand 0 wird `epsilon` als Nenner eingesetzt und eine Warnung geloggt.
pub fn direction(a: &Point, b: &Point, epsilon: f64) -> Direction {
    let mut d = distance(a, b);
    let degenerate = d == 0.0;
    if degenerate {
        log::warn!(
            "Richtung zwischen identischen Punkten (Abstand 0), verwende Epsilon {}",
            epsilon
        );
        d = epsilon;
    }

    let unit = a
        .coords()
        .iter()
        .zip(b.coords())
        .map(|(x, y)| (y - x) / d)
        .collect::<Vec<_>>();

    Direction {
        unit: Point::new(unit),
        degenerate,
    }
}

/// `origin + unit * scalar`, koordinatenweise.
pub fn step_along(origin: &Point, unit: &Point, scalar: f64) -> Point {
    origin
        .coords()
        .iter()
        .zip(unit.coords())
        .map(|(o, u)| o + u * scalar)
        .collect::<Vec<_>>()
        .into()
}
