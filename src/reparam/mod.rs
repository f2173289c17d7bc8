//! Äquidistante Reparametrisierung eines Pfads im CV-Raum.
//!
//! Ein Durchlauf des String-Verfahrens nach Maragliano et al. (J. Chem. Phys. 125, 2006):
//! die inneren Punkte werden per linearer Interpolation entlang des Originalpfads
//! so verschoben, dass sie gleiche Bogenlänge voneinander haben.
//!
//! Indizes folgen der 1-basierten Konvention der Veröffentlichung:
//! `n` steht für "Pfad bis einschließlich Punkt n".

mod arc_length;
mod driver;
mod interpolate;
mod metric;
mod segment;

pub use arc_length::ArcLength;
pub use driver::{reparametrize, ReparamReport, Reparametrized};
pub use interpolate::{direction, step_along, Direction};
pub use metric::distance;
pub use segment::SegmentLocator;
