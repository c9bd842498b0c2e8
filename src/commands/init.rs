use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

use crate::config::{self, MANIFEST_NAME};

const MANIFEST_TEMPLATE: &str = r#"[module]
name = "{{MODULE_NAME}}"
package = "{{PACKAGE}}"
library = "{{LIBRARY}}"

[limits]
fibonacci_max = 78
factorize_max = 2147483647

[logging]
level = "info"
tag = "{{MODULE_NAME}}"
"#;

/// Write a default mobilecore.toml into `dir`
pub fn execute(dir: &str, name: &str, package: &str) -> Result<()> {
    let dir_path = Path::new(dir);
    let manifest_path = dir_path.join(MANIFEST_NAME);

    if manifest_path.exists() {
        anyhow::bail!("'{}' already exists", manifest_path.display());
    }

    let manifest = MANIFEST_TEMPLATE
        .replace("{{MODULE_NAME}}", name)
        .replace("{{PACKAGE}}", package)
        .replace("{{LIBRARY}}", &name.to_ascii_lowercase());

    // Refuse to write something load_config would reject later
    config::parse_config(&manifest)?;

    fs::create_dir_all(dir_path)
        .context(format!("Failed to create directory: {}", dir_path.display()))?;
    fs::write(&manifest_path, manifest)
        .context(format!("Failed to write {}", manifest_path.display()))?;

    println!(
        "     {} `{}` for module `{}`",
        "Created".green().bold(),
        manifest_path.display(),
        name
    );

    Ok(())
}
