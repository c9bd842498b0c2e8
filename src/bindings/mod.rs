//! Host glue generation
//!
//! Everything here is derived from the operation table, so the generated
//! Kotlin, TypeScript and C declarations cannot drift from what the library
//! exports.

pub mod c_header;
pub mod kotlin;
pub mod types;
pub mod typescript;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ModuleConfig;

/// Package of the Kotlin object holding the `external fun` declarations.
/// Fixed, because the JNI symbol names are compiled into the library.
pub const NATIVE_PACKAGE: &str = "com.mobilecore";
pub const NATIVE_CLASS: &str = "MobileCoreNative";

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    /// Relative to the output directory
    pub path: PathBuf,
    pub contents: String,
}

pub(crate) fn banner(comment: &str) -> String {
    format!(
        "{} Generated by mobilecore {}. Do not edit.\n",
        comment,
        crate::kernel::info::VERSION
    )
}

/// Render every binding file for `module`.
pub fn generate(module: &ModuleConfig) -> Vec<GeneratedFile> {
    let package_dir = PathBuf::from("android").join(module.package.replace('.', "/"));
    let native_dir = PathBuf::from("android").join(NATIVE_PACKAGE.replace('.', "/"));

    vec![
        GeneratedFile {
            path: native_dir.join(format!("{}.kt", NATIVE_CLASS)),
            contents: kotlin::generate_native_object(module),
        },
        GeneratedFile {
            path: package_dir.join(format!("{}Module.kt", module.name)),
            contents: kotlin::generate_module(module),
        },
        GeneratedFile {
            path: package_dir.join(format!("{}Package.kt", module.name)),
            contents: kotlin::generate_package(module),
        },
        GeneratedFile {
            path: PathBuf::from("js").join(format!("Native{}.ts", module.name)),
            contents: typescript::generate_spec(module),
        },
        GeneratedFile {
            path: PathBuf::from("include").join("mobilecore.h"),
            contents: c_header::generate_header(),
        },
    ]
}

/// Write generated files under `out_dir`, returning the paths written.
pub fn write_all(files: &[GeneratedFile], out_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(files.len());

    for file in files {
        let path = out_dir.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .context(format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&path, &file.contents)
            .context(format!("Failed to write {}", path.display()))?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_paths() {
        let module = ModuleConfig {
            name: "NimBridge".to_string(),
            package: "com.example.bridge".to_string(),
            library: "nim_functions".to_string(),
        };
        let paths: Vec<PathBuf> = generate(&module).into_iter().map(|f| f.path).collect();

        assert_eq!(
            paths,
            vec![
                PathBuf::from("android/com/mobilecore/MobileCoreNative.kt"),
                PathBuf::from("android/com/example/bridge/NimBridgeModule.kt"),
                PathBuf::from("android/com/example/bridge/NimBridgePackage.kt"),
                PathBuf::from("js/NativeNimBridge.ts"),
                PathBuf::from("include/mobilecore.h"),
            ]
        );
    }

    #[test]
    fn test_banner() {
        assert_eq!(
            banner("//"),
            format!("// Generated by mobilecore {}. Do not edit.\n", env!("CARGO_PKG_VERSION"))
        );
    }
}
