//! Suche des Segments, das eine Ziel-Bogenlänge enthält.

use super::ArcLength;

/// Findet zu einer Ziel-Bogenlänge `t` das Segment `k` (1-basiert, `k >= 2`) mit
/// `L(k - 1) < t <= L(k)`.
///
/// Das Segment `k` verbindet die Punkte `k - 1` und `k` (1-basiert), also
/// `points[k - 2]` und `points[k - 1]`. Segmente der Länge 0 erfüllen die
/// Bedingung nie. Für `t = 0` umschließt kein Segment das Ziel; dann gilt
/// das erste Segment (`k = 2`), der Schritt darauf ist 0.
#[derive(Debug, Clone, Copy)]
pub struct SegmentLocator<'a> {
    arc: &'a ArcLength,
}

impl<'a> SegmentLocator<'a> {
    pub fn new(arc: &'a ArcLength) -> Self {
        Self { arc }
    }

    /// Binäre Suche über die monotonen `L(n)`.
    ///
    /// `None` für `t < 0`, `t > L(numpoints)`, `NaN` oder Pfade mit nur einem Punkt.
    pub fn locate(&self, target: f64) -> Option<usize> {
        let lengths = self.arc.lengths();
        let k = lengths.partition_point(|&len| len < target);
        if k >= 2 && k < lengths.len() && lengths[k - 1] < target {
            return Some(k);
        }
        // Ziel liegt auf dem Startpunkt
        (target == 0.0 && lengths.len() > 2).then_some(2)
    }
}
