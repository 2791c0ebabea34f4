use anyhow::{Context, Result};
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
/// Passed explicitly into the pipeline entry points; no module reads
/// ambient state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Scratch directory for generated spreadsheets.
    pub output_dir: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            output_dir: PathBuf::from(
                std::env::var("OUTPUT_DIR").unwrap_or_else(|_| "uploads".to_string()),
            ),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Creates the export scratch directory and verifies it is writable.
    /// Called once at startup, before the server accepts requests.
    pub fn ensure_output_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("Failed to create output dir '{}'", self.output_dir.display())
        })?;

        let probe = self.output_dir.join(".write_check");
        std::fs::write(&probe, b"").with_context(|| {
            format!("Output dir '{}' is not writable", self.output_dir.display())
        })?;
        let _ = std::fs::remove_file(&probe);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_output_dir_creates_missing_directory() {
        let base = tempfile::tempdir().unwrap();
        let config = Config {
            output_dir: base.path().join("nested").join("scratch"),
            port: 8080,
            rust_log: "info".to_string(),
        };

        config.ensure_output_dir().unwrap();
        assert!(config.output_dir.is_dir());
    }

    #[test]
    fn test_ensure_output_dir_rejects_unwritable_location() {
        // A path under a regular file can never be created.
        let base = tempfile::tempdir().unwrap();
        let file = base.path().join("occupied");
        std::fs::write(&file, b"x").unwrap();

        let config = Config {
            output_dir: file.join("scratch"),
            port: 8080,
            rust_log: "info".to_string(),
        };

        assert!(config.ensure_output_dir().is_err());
    }
}
