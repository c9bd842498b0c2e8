use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::kernel::{Limits, FIBONACCI_HARD_MAX};

pub const MANIFEST_NAME: &str = "mobilecore.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub module: ModuleConfig,
    #[serde(default)]
    pub limits: Limits,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How the host sees the native module
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct ModuleConfig {
    #[serde(default = "default_module_name")]
    pub name: String,
    #[serde(default = "default_package")]
    pub package: String,
    #[serde(default = "default_library")]
    pub library: String,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            name: default_module_name(),
            package: default_package(),
            library: default_library(),
        }
    }
}

fn default_module_name() -> String {
    "MobileCore".to_string()
}

fn default_package() -> String {
    "com.mobilecore".to_string()
}

fn default_library() -> String {
    "mobilecore".to_string()
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    /// Android log tag
    #[serde(default = "default_tag")]
    pub tag: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            tag: default_tag(),
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_tag() -> String {
    "MobileCore".to_string()
}

/// Load and parse a mobilecore.toml configuration file
pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            anyhow::anyhow!("could not find `{}`", path.display())
        } else {
            anyhow::anyhow!("failed to read `{}`: {}", path.display(), e)
        }
    })?;

    parse_config(&content).map_err(|e| anyhow::anyhow!("failed to parse `{}`: {}", path.display(), e))
}

/// Parse and validate configuration text
pub fn parse_config(content: &str) -> Result<Config> {
    let mut config: Config = toml::from_str(content)?;
    validate(&mut config)?;
    Ok(config)
}

fn validate(config: &mut Config) -> Result<()> {
    validate_package_name(&config.module.package)?;
    validate_module_name(&config.module.name)?;
    validate_library_name(&config.module.library)?;

    if config.logging.level.parse::<log::LevelFilter>().is_err() {
        anyhow::bail!(
            "Invalid log level '{}'. Expected one of: off, error, warn, info, debug, trace",
            config.logging.level
        );
    }

    // android_logger hands the tag to C
    if config.logging.tag.is_empty() || config.logging.tag.contains('\0') {
        anyhow::bail!(
            "Invalid log tag {:?}. Must be non-empty and contain no NUL characters",
            config.logging.tag
        );
    }

    let limits = &mut config.limits;
    if limits.fibonacci_max < 0 {
        anyhow::bail!("limits.fibonacci_max must be >= 0, got {}", limits.fibonacci_max);
    }
    if limits.fibonacci_max > FIBONACCI_HARD_MAX {
        log::warn!(
            "limits.fibonacci_max = {} is above the exact-double maximum, using {}",
            limits.fibonacci_max,
            FIBONACCI_HARD_MAX
        );
        limits.fibonacci_max = FIBONACCI_HARD_MAX;
    }
    if limits.factorize_max < 2 {
        anyhow::bail!("limits.factorize_max must be >= 2, got {}", limits.factorize_max);
    }

    Ok(())
}

/// Validate Android package name format
fn validate_package_name(package: &str) -> Result<()> {
    // Must have at least two parts (e.g., com.example)
    let parts: Vec<&str> = package.split('.').collect();
    if parts.len() < 2 {
        anyhow::bail!(
            "Invalid Android package name '{}'. Must have at least two parts (e.g., 'com.example')",
            package
        );
    }

    for (i, part) in parts.iter().enumerate() {
        let mut chars = part.chars();
        let first_char = match chars.next() {
            Some(c) => c,
            None => anyhow::bail!(
                "Invalid Android package name '{}'. Part {} is empty",
                package,
                i + 1
            ),
        };

        if !first_char.is_ascii_lowercase() {
            anyhow::bail!(
                "Invalid Android package name '{}'. Part '{}' must start with a lowercase letter",
                package,
                part
            );
        }

        if let Some(ch) = chars.find(|ch| !ch.is_ascii_lowercase() && !ch.is_ascii_digit() && *ch != '_') {
            anyhow::bail!(
                "Invalid Android package name '{}'. Part '{}' contains invalid character '{}'",
                package,
                part,
                ch
            );
        }
    }

    Ok(())
}

/// Module names become Kotlin class names and JS registry keys
fn validate_module_name(name: &str) -> Result<()> {
    let valid = name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
        && name.chars().all(|c| c.is_ascii_alphanumeric());
    if !valid {
        anyhow::bail!(
            "Invalid module name '{}'. Must be PascalCase letters and digits (e.g., 'MobileCore')",
            name
        );
    }
    Ok(())
}

fn validate_library_name(name: &str) -> Result<()> {
    let valid = name.chars().next().is_some_and(|c| c.is_ascii_lowercase())
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if !valid {
        anyhow::bail!(
            "Invalid library name '{}'. Must be lowercase letters, digits and underscores",
            name
        );
    }
    Ok(())
}
