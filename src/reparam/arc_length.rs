//! Kumulierte Bogenlängen des Originalpfads.

use super::distance;
use crate::core::Path;

/// Vorberechnete Bogenlängen `L(n)` für `n = 0..=numpoints`.
///
/// `L(n)` ist die Länge des Pfads aus den ersten `n` Punkten, also die Summe
/// der ersten `n - 1` Segmentlängen. `L(0)` und `L(1)` sind beide 0; die
/// Segmentsuche beginnt bei Segment 2 und fragt `L(0)` nie ab.
#[derive(Debug, Clone)]
pub struct ArcLength {
    prefix: Vec<f64>,
    zero_length_segments: Vec<usize>,
}

impl ArcLength {
    pub fn new(path: &Path) -> Self {
        let mut prefix = Vec::with_capacity(path.len() + 1);
        prefix.push(0.0);
        prefix.push(0.0);

        let mut zero_length_segments = Vec::new();
        let mut running = 0.0;
        for (segment, w) in path.points().windows(2).enumerate() {
            let len = distance(&w[0], &w[1]);
            if len == 0.0 {
                log::warn!(
                    "Punkte {} und {} sind identisch (Segmentlaenge 0), Eingabepfad pruefen",
                    segment,
                    segment + 1
                );
                zero_length_segments.push(segment);
            }
            running += len;
            prefix.push(running);
        }

        Self {
            prefix,
            zero_length_segments,
        }
    }

    /// Anzahl der Punkte des zugrundeliegenden Pfads.
    pub fn numpoints(&self) -> usize {
        self.prefix.len() - 1
    }

    /// `L(n)`: Länge des Pfads aus den ersten `n` Punkten.
    ///
    /// Für `n > numpoints` wird die Gesamtlänge geliefert.
    pub fn cumulative_length(&self, n: usize) -> f64 {
        self.prefix[n.min(self.prefix.len() - 1)]
    }

    /// Alle `L(n)` als Slice, monoton nicht-fallend.
    pub fn lengths(&self) -> &[f64] {
        &self.prefix
    }

    /// Gesamtlänge aller Segmente.
    pub fn total(&self) -> f64 {
        self.prefix[self.prefix.len() - 1]
    }

    /// 0-basierte Indizes der Segmente mit Länge 0 (doppelte Punkte).
    pub fn zero_length_segments(&self) -> &[usize] {
        &self.zero_length_segments
    }

    /// `s(m)`: Ziel-Bogenlänge des `m`-ten äquidistanten Punkts.
    ///
    /// `(m - 1) * L(R) / (R - 1)` mit `R = numpoints - 1`. Der letzte Punkt
    /// (`m = R`) landet exakt auf `L(R)`. Für `R < 2` gibt es keine Zwischenpunkte
    /// und das Ergebnis ist 0.
    pub fn target_arc_length(&self, m: usize) -> f64 {
        let numpoints = self.numpoints();
        if numpoints < 3 {
            return 0.0;
        }
        let r = numpoints - 1;
        let fraction = (m as f64 - 1.0) / (r - 1) as f64;
        self.cumulative_length(r) * fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Point;
    use approx::assert_relative_eq;

    fn line(xs: &[f64]) -> Path {
        Path::new(xs.iter().map(|&x| Point::from([x])).collect()).unwrap()
    }

    #[test]
    fn test_cumulative_length_1_based() {
        let arc = ArcLength::new(&line(&[0.0, 3.0, 4.0, 10.0]));
        assert_eq!(arc.cumulative_length(0), 0.0);
        assert_eq!(arc.cumulative_length(1), 0.0);
        assert_relative_eq!(arc.cumulative_length(2), 3.0);
        assert_relative_eq!(arc.cumulative_length(3), 4.0);
        assert_relative_eq!(arc.cumulative_length(4), 10.0);
        assert_relative_eq!(arc.cumulative_length(99), 10.0);
        assert_relative_eq!(arc.total(), 10.0);
    }

    #[test]
    fn test_target_arc_length_spans_first_r_points() {
        // R = 3, L(3) = 4, also Schritte von 2
        let arc = ArcLength::new(&line(&[0.0, 3.0, 4.0, 10.0]));
        assert_eq!(arc.target_arc_length(1), 0.0);
        assert_relative_eq!(arc.target_arc_length(2), 2.0);
        assert_eq!(arc.target_arc_length(3), arc.cumulative_length(3));
    }

    #[test]
    fn test_target_arc_length_without_interior() {
        let arc = ArcLength::new(&line(&[0.0, 1.0]));
        assert_eq!(arc.target_arc_length(2), 0.0);
    }

    #[test]
    fn test_zero_length_segments_are_recorded() {
        let arc = ArcLength::new(&line(&[0.0, 0.0, 2.0, 2.0]));
        assert_eq!(arc.zero_length_segments(), &[0, 2]);
        assert!(arc.lengths().windows(2).all(|w| w[0] <= w[1]));
    }
}
