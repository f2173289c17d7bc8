//! Zentrale Konfiguration der Reparametrisierung.
//!
//! `ReparamOptions` enthält alle einstellbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

/// Ersatz-Nenner, wenn zwei Punkte einer Richtung zusammenfallen.
pub const DEGENERATE_EPSILON: f64 = 0.0001;

/// Einstellbare Werte eines Laufs.
///
/// Das `rep`-Binary verwendet immer `ReparamOptions::default()`; Laden und
/// Speichern als TOML ist für Bibliotheksnutzer gedacht.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReparamOptions {
    /// Nenner für Richtungen zwischen identischen Punkten
    #[serde(default = "default_degenerate_epsilon")]
    pub degenerate_epsilon: f64,
    /// Nachkommastellen der Ausgabe; `None` = kürzeste exakte Darstellung
    #[serde(default)]
    pub output_precision: Option<usize>,
    /// Abstände des Ergebnispfads auf Debug-Level loggen
    #[serde(default = "default_log_spacing")]
    pub log_spacing: bool,
}

impl Default for ReparamOptions {
    fn default() -> Self {
        Self {
            degenerate_epsilon: DEGENERATE_EPSILON,
            output_precision: None,
            log_spacing: true,
        }
    }
}

/// Serde-Default für `degenerate_epsilon`.
fn default_degenerate_epsilon() -> f64 {
    DEGENERATE_EPSILON
}

/// Serde-Default für `log_spacing`.
fn default_log_spacing() -> bool {
    true
}

impl ReparamOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("{}_{}.toml", name, std::process::id()))
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_file("reparam_options_roundtrip");
        let options = ReparamOptions {
            degenerate_epsilon: 1e-6,
            output_precision: Some(6),
            log_spacing: false,
        };
        options.save_to_file(&path).expect("Speichern fehlgeschlagen");
        let loaded = ReparamOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, options);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let opts: ReparamOptions = toml::from_str("output_precision = 3").unwrap();
        assert_eq!(opts.output_precision, Some(3));
        assert_eq!(opts.degenerate_epsilon, DEGENERATE_EPSILON);
        assert!(opts.log_spacing);
    }

    #[test]
    fn test_missing_or_broken_file_falls_back() {
        let missing = temp_file("reparam_options_missing");
        assert_eq!(ReparamOptions::load_from_file(&missing), ReparamOptions::default());

        let broken = temp_file("reparam_options_broken");
        std::fs::write(&broken, "degenerate_epsilon = [").unwrap();
        let loaded = ReparamOptions::load_from_file(&broken);
        let _ = std::fs::remove_file(&broken);
        assert_eq!(loaded, ReparamOptions::default());
    }
}
