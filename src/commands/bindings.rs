use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::bindings;
use crate::commands::resolve_config;

/// Generate host glue into `out_dir`, returning the files written
pub fn run(config_path: Option<&str>, out_dir: &str) -> Result<Vec<PathBuf>> {
    let config = resolve_config(config_path)?;
    let files = bindings::generate(&config.module);
    bindings::write_all(&files, Path::new(out_dir))
}

pub fn execute(config_path: Option<&str>, out_dir: &str) -> Result<()> {
    let start = Instant::now();
    let written = run(config_path, out_dir)?;

    for path in &written {
        println!("   {} {}", "Generated".green().bold(), path.display());
    }
    println!(
        "    {} {} file(s) in {:.2}s",
        "Finished".green().bold(),
        written.len(),
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
