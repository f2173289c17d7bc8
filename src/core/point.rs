//! Einzelner Punkt im Raum der kollektiven Variablen (CVs).

/// Punkt mit fester Anzahl an CV-Koordinaten.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    coords: Vec<f64>,
}

impl Point {
    /// Erstellt einen Punkt aus seinen Koordinaten.
    pub fn new(coords: Vec<f64>) -> Self {
        Self { coords }
    }

    /// Ursprungspunkt mit `dim` Koordinaten.
    pub fn zeros(dim: usize) -> Self {
        Self {
            coords: vec![0.0; dim],
        }
    }

    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Anzahl der CVs (Dimension).
    pub fn dim(&self) -> usize {
        self.coords.len()
    }
}

impl From<Vec<f64>> for Point {
    fn from(coords: Vec<f64>) -> Self {
        Self::new(coords)
    }
}

impl<const N: usize> From<[f64; N]> for Point {
    fn from(coords: [f64; N]) -> Self {
        Self::new(coords.to_vec())
    }
}
