//! `rep`: reparametrisiert einen Pfad von stdin nach stdout.
//!
//! Wird vom String-Treiber einmal pro Iteration als Kindprozess gestartet.
//! Keine Kommandozeilen-Argumente, keine Konfigurationsdatei.

use anyhow::Context;
use cv_string_reparam::{run_filter, write_output, ReparamOptions};
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Logger initialisieren (nur stderr, stdout gehört dem Protokoll)
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run() -> anyhow::Result<()> {
    let options = ReparamOptions::default();

    let output = run_filter(std::io::stdin().lock(), &options)
        .context("Reparametrisierung fehlgeschlagen")?;

    let mut stdout = std::io::stdout().lock();
    write_output(&mut stdout, &output).context("Ausgabe nach stdout fehlgeschlagen")?;
    stdout.flush()?;
    Ok(())
}
