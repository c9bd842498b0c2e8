pub const GREETING: &str = "Hello from Mobile Core!";

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `mobilecore <version> on <os> (<arch>)`
pub fn system_info() -> String {
    use std::env::consts::{ARCH, OS};

    format!("mobilecore {} on {} ({})", VERSION, OS, ARCH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_info_mentions_platform() {
        let info = system_info();
        assert!(info.starts_with(&format!("mobilecore {} on ", VERSION)));
        assert!(info.contains(std::env::consts::OS));
        assert!(info.ends_with(&format!("({})", std::env::consts::ARCH)));
    }

    #[test]
    fn test_version_matches_manifest() {
        assert_eq!(VERSION, "0.1.0");
    }
}
