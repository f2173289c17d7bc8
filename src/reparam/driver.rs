//! Ein Reparametrisierungs-Durchlauf über alle inneren Punkte.

use super::{direction, step_along, ArcLength, SegmentLocator};
use crate::core::{Path, Point};
use crate::error::ReparamError;
use crate::shared::ReparamOptions;

/// Diagnosen eines Durchlaufs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReparamReport {
    /// Gesamtlänge des Eingabepfads
    pub total_length: f64,
    /// 0-basierte Indizes der Eingabesegmente mit Länge 0
    pub duplicate_segments: Vec<usize>,
    /// Anzahl der Richtungen, bei denen das Epsilon eingesetzt wurde
    pub degenerate_directions: usize,
}

/// Ergebnis von [`reparametrize`].
#[derive(Debug, Clone)]
pub struct Reparametrized {
    pub path: Path,
    pub report: ReparamReport,
}

/// Verteilt die inneren Punkte von `path` äquidistant entlang der Bogenlänge.
///
/// Für `i = 2..numpoints` (1-basiert) wird Punkt `i` auf die Ziel-Bogenlänge
/// `s(i)` gesetzt und in Slot `i - 1` abgelegt. Erster und letzter Punkt werden
/// unverändert übernommen. Pfade mit weniger als 3 Punkten bleiben unverändert.
///
/// Der Treiber übergibt üblicherweise einen Pfad mit angehängtem Padding-Punkt
/// (siehe [`Path::with_padding_point`]), sodass `R = numpoints - 1` genau den
/// echten Pfad abdeckt.
pub fn reparametrize(path: &Path, options: &ReparamOptions) -> Result<Reparametrized, ReparamError> {
    let numpoints = path.len();
    let arc = ArcLength::new(path);
    let mut report = ReparamReport {
        total_length: arc.total(),
        duplicate_segments: arc.zero_length_segments().to_vec(),
        degenerate_directions: 0,
    };

    log::debug!(
        "Reparametrisiere {} Punkte mit {} CVs, Gesamtlaenge {}",
        numpoints,
        path.shape().numcvs,
        report.total_length
    );

    if numpoints < 3 {
        return Ok(Reparametrized {
            path: path.clone(),
            report,
        });
    }

    if !report.total_length.is_finite() {
        return Err(ReparamError::NonFinite {
            total: report.total_length,
        });
    }

    let points = path.points();
    let locator = SegmentLocator::new(&arc);

    let mut adjusted: Vec<Point> = Vec::with_capacity(numpoints);
    adjusted.push(path.first().clone());

    for i in 2..numpoints {
        let target = arc.target_arc_length(i);
        let k = locator
            .locate(target)
            .ok_or(ReparamError::SegmentNotFound {
                target,
                total: arc.total(),
            })?;

        let lower = &points[k - 2];
        let dir = direction(lower, &points[k - 1], options.degenerate_epsilon);
        if dir.degenerate {
            report.degenerate_directions += 1;
        }

        adjusted.push(step_along(lower, &dir.unit, target - arc.cumulative_length(k - 1)));
    }

    adjusted.push(path.last().clone());
    let adjusted = Path::new(adjusted)?;
    if !adjusted.flat_values().all(f64::is_finite) {
        return Err(ReparamError::NonFinite {
            total: report.total_length,
        });
    }

    if options.log_spacing && log::log_enabled!(log::Level::Debug) {
        log::debug!("Abstaende nach Reparametrisierung: {:?}", adjusted.segment_lengths());
    }

    Ok(Reparametrized {
        path: adjusted,
        report,
    })
}
