//! Geteilte Typen: Laufzeit-Optionen der Reparametrisierung.

pub mod options;

pub use options::ReparamOptions;
pub use options::DEGENERATE_EPSILON;
