//! CV String Reparam Library.
//!
//! Äquidistante Reparametrisierung eines diskretisierten Pfads im Raum der
//! kollektiven Variablen (Finite-Temperature-String-Methode).
//! Als Library exportiert für Tests, Benchmarks und Einbettung in String-Treiber.

pub mod app;
pub mod core;
pub mod error;
pub mod io;
pub mod reparam;
pub mod shared;

pub use app::{run_filter, FilterOutput, Stage};
pub use crate::core::{Path, PathShape, Point};
pub use error::ReparamError;
pub use io::{parse_path, read_path, render_path, write_output};
pub use reparam::{reparametrize, ReparamReport, Reparametrized};
pub use shared::ReparamOptions;
