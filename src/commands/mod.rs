pub mod bindings;
pub mod call;
pub mod init;
pub mod list;

use anyhow::Result;
use std::path::Path;

use crate::config::{self, Config, MANIFEST_NAME};

/// Resolve the configuration a command should use
///
/// An explicit path must exist. Without one, `mobilecore.toml` in the current
/// directory is used if present, otherwise the built-in defaults.
pub fn resolve_config(path: Option<&str>) -> Result<Config> {
    match path {
        Some(path) => config::load_config(path),
        None => {
            if Path::new(MANIFEST_NAME).exists() {
                config::load_config(MANIFEST_NAME)
            } else {
                Ok(Config::default())
            }
        }
    }
}
