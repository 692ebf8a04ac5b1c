//! Version comparison between the CLI and the stub set it reads

use anyhow::Result;
use semver::Version;

/// Warn when the stub set expects a newer installer than the one running.
/// Unparseable versions are not compared.
pub fn check_compatibility(cli_version: &str, stubs_version: &str) -> Option<String> {
    let cli_ver = parse_version(cli_version).ok()?;
    let stubs_ver = parse_version(stubs_version).ok()?;

    if cli_ver < stubs_ver {
        Some(format!(
            "These stubs were written for installer version {} or newer.\n\
             You are running version {}.\n\
             Consider updating: cargo install stack-installer --force",
            stubs_version, cli_version
        ))
    } else {
        None
    }
}

/// Parse a version string, accepting a leading `v`
pub fn parse_version(version_str: &str) -> Result<Version> {
    let cleaned = version_str.trim().strip_prefix('v').unwrap_or(version_str.trim());
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_older_than_stubs() {
        let warning = check_compatibility("0.1.0", "0.2.0");
        assert!(warning.is_some());
        assert!(warning.unwrap().contains("0.2.0"));
    }

    #[test]
    fn test_cli_same_or_newer() {
        assert!(check_compatibility("0.1.0", "0.1.0").is_none());
        assert!(check_compatibility("0.2.0", "v0.1.0").is_none());
    }

    #[test]
    fn test_invalid_versions_are_ignored() {
        assert!(check_compatibility("invalid", "0.1.0").is_none());
        assert!(check_compatibility("0.1.0", "next").is_none());
    }
}
