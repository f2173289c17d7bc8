//! Ablauf eines Filter-Laufs: Kopfzeile lesen → Punkte lesen → Reparametrisieren → Ausgeben.

mod pipeline;

pub use pipeline::{run_filter, FilterOutput, Stage};
