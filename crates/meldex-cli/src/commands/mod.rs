pub mod config;
pub mod daily;
pub mod index;
pub mod lookup;
pub mod verify;

use meldex_core::config::ExtractionConfig;
use meldex_core::error::MeldexError;
use std::path::Path;

/// Config from `--config`, or the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<ExtractionConfig, MeldexError> {
    match path {
        Some(path) => meldex_core::config::load_config(path),
        None => Ok(ExtractionConfig::default()),
    }
}

fn read_input(path: &Path) -> Result<Vec<u8>, MeldexError> {
    if !path.exists() {
        return Err(MeldexError::InputNotFound(path.to_path_buf()));
    }
    Ok(std::fs::read(path)?)
}
