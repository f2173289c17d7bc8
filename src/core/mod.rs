//! Core-Domänentypen: Punkte im CV-Raum und Pfade aus solchen Punkten.

pub mod path;
pub mod point;

pub use path::{Path, PathShape};
pub use point::Point;
