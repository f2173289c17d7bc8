//! Geordneter Pfad aus Punkten gleicher Dimension.

use super::Point;
use crate::error::ReparamError;
use crate::reparam::distance;

/// Form eines Pfads: Anzahl Punkte und CVs pro Punkt.
///
/// Ist für einen Lauf fest und wird explizit weitergereicht.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathShape {
    pub numpoints: usize,
    pub numcvs: usize,
}

impl PathShape {
    /// Prüft, dass beide Größen positiv sind und ihr Produkt darstellbar ist.
    pub fn new(numpoints: usize, numcvs: usize) -> Result<Self, ReparamError> {
        if numpoints == 0 || numcvs == 0 || numpoints.checked_mul(numcvs).is_none() {
            return Err(ReparamError::InvalidShape { numpoints, numcvs });
        }
        Ok(Self { numpoints, numcvs })
    }

    /// Anzahl der Koordinaten im flachen Format (`numpoints * numcvs`).
    pub fn value_count(&self) -> usize {
        self.numpoints * self.numcvs
    }
}

/// Pfad im CV-Raum. Alle Punkte haben dieselbe Dimension `numcvs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    shape: PathShape,
    points: Vec<Point>,
}

impl Path {
    /// Erstellt einen Pfad und prüft die einheitliche Dimension aller Punkte.
    pub fn new(points: Vec<Point>) -> Result<Self, ReparamError> {
        let numcvs = points.first().map_or(0, Point::dim);
        let shape = PathShape::new(points.len(), numcvs)?;

        if let Some((index, point)) = points
            .iter()
            .enumerate()
            .find(|(_, p)| p.dim() != numcvs)
        {
            return Err(ReparamError::DimensionMismatch {
                index,
                expected: numcvs,
                found: point.dim(),
            });
        }

        Ok(Self { shape, points })
    }

    /// Baut einen Pfad aus dem flachen Punkt-major-Format.
    pub fn from_flat(shape: PathShape, values: &[f64]) -> Result<Self, ReparamError> {
        if values.len() != shape.value_count() {
            return Err(ReparamError::MissingCoordinates {
                expected: shape.value_count(),
                found: values.len(),
            });
        }
        let points = values
            .chunks_exact(shape.numcvs)
            .map(|chunk| Point::new(chunk.to_vec()))
            .collect();
        Self::new(points)
    }

    pub fn shape(&self) -> PathShape {
        self.shape
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Ein gültiger Pfad enthält immer mindestens einen Punkt.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> &Point {
        &self.points[0]
    }

    pub fn last(&self) -> &Point {
        &self.points[self.points.len() - 1]
    }

    /// Koordinaten im flachen Format: alle CVs von Punkt 0, dann Punkt 1, ...
    pub fn flat_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().flat_map(|p| p.coords().iter().copied())
    }

    /// Euklidische Länge jedes Segments (`len() - 1` Werte).
    pub fn segment_lengths(&self) -> Vec<f64> {
        self.points
            .windows(2)
            .map(|w| distance(&w[0], &w[1]))
            .collect()
    }

    /// Hängt einen Null-Punkt als Padding an.
    ///
    /// Der String-Treiber übergibt Pfade mit einem zusätzlichen letzten Punkt,
    /// damit `R = numpoints - 1` genau den echten Pfad abdeckt.
    pub fn with_padding_point(&self) -> Path {
        let mut points = self.points.clone();
        points.push(Point::zeros(self.shape.numcvs));
        Self {
            shape: PathShape {
                numpoints: points.len(),
                numcvs: self.shape.numcvs,
            },
            points,
        }
    }

    /// Entfernt den Padding-Punkt wieder. `None`, wenn danach nichts übrig bliebe.
    pub fn without_padding_point(&self) -> Option<Path> {
        if self.points.len() < 2 {
            return None;
        }
        let points = self.points[..self.points.len() - 1].to_vec();
        Some(Self {
            shape: PathShape {
                numpoints: points.len(),
                numcvs: self.shape.numcvs,
            },
            points,
        })
    }
}
