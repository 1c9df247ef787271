//! Bundle version parsing and compatibility
//!
//! Bundle versions follow the Maven convention: up to three dot-separated
//! numeric components, optionally followed by `-qualifier`. Parsing is
//! lenient about missing components (`1.0` reads as `1.0.0`) and maps the
//! qualifier onto a semver pre-release, so `4.4.0-SNAPSHOT` orders before
//! `4.4.0`.

use semver::{Prerelease, Version};

use crate::error::{Result, invalid_dependency_version};

/// Parse a Maven-scheme version string into an ordered [`Version`]
///
/// # Errors
///
/// Returns `ArtificerError::InvalidDependencyVersion` when the string is
/// empty, has more than three numeric components, or contains a non-numeric
/// component or an invalid qualifier.
pub fn parse_version(version: &str) -> Result<Version> {
    let trimmed = version.trim();
    if trimmed.is_empty() {
        return Err(invalid_dependency_version(version, "version string is empty"));
    }

    let (numeric, qualifier) = match trimmed.split_once('-') {
        Some((numeric, qualifier)) => (numeric, Some(qualifier)),
        None => (trimmed, None),
    };

    let components: Vec<&str> = numeric.split('.').collect();
    if components.len() > 3 {
        return Err(invalid_dependency_version(
            version,
            "more than three numeric components",
        ));
    }

    let mut parts = [0u64; 3];
    for (index, component) in components.iter().enumerate() {
        parts[index] = component.parse().map_err(|_| {
            invalid_dependency_version(version, format!("'{component}' is not a number"))
        })?;
    }

    let mut parsed = Version::new(parts[0], parts[1], parts[2]);
    if let Some(qualifier) = qualifier {
        parsed.pre = Prerelease::new(qualifier)
            .map_err(|e| invalid_dependency_version(version, e.to_string()))?;
    }

    Ok(parsed)
}

/// The major token of a version string: everything before the first `.`,
/// or the whole string when there is no `.`
pub fn major_token(version: &str) -> &str {
    version.split('.').next().unwrap_or(version)
}

/// Check whether an available bundle version satisfies an expected one
///
/// Equal strings are trivially compatible. Otherwise the available version
/// must order at or above the expected one AND both must share the same
/// major token: newer patch/minor versions of the same major line are
/// acceptable, cross-major versions are not, and an older available version
/// never is.
///
/// # Errors
///
/// Returns `ArtificerError::InvalidDependencyVersion` when either side fails
/// to parse (unless the strings are equal, which short-circuits the parse).
pub fn is_compatible_version(available: &str, expected: &str) -> Result<bool> {
    if available == expected {
        return Ok(true);
    }

    let available_version = parse_version(available)?;
    let expected_version = parse_version(expected)?;

    Ok(available_version >= expected_version && major_token(available) == major_token(expected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArtificerError;

    #[test]
    fn test_parse_full_version() {
        let version = parse_version("4.4.0").unwrap();
        assert_eq!(version, Version::new(4, 4, 0));
    }

    #[test]
    fn test_parse_pads_missing_components() {
        assert_eq!(parse_version("1.0").unwrap(), Version::new(1, 0, 0));
        assert_eq!(parse_version("2").unwrap(), Version::new(2, 0, 0));
    }

    #[test]
    fn test_parse_qualifier_orders_before_release() {
        let snapshot = parse_version("4.4.0-SNAPSHOT").unwrap();
        let release = parse_version("4.4.0").unwrap();
        assert!(snapshot < release);
    }

    #[test]
    fn test_parse_rejects_non_numeric_component() {
        let result = parse_version("1.x");
        assert!(matches!(
            result.unwrap_err(),
            ArtificerError::InvalidDependencyVersion { .. }
        ));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(parse_version("").is_err());
        assert!(parse_version("   ").is_err());
    }

    #[test]
    fn test_parse_rejects_four_components() {
        assert!(parse_version("1.2.3.4").is_err());
    }

    #[test]
    fn test_major_token() {
        assert_eq!(major_token("2.1.0"), "2");
        assert_eq!(major_token("10.0"), "10");
        assert_eq!(major_token("x"), "x");
    }

    #[test]
    fn test_compatible_newer_minor_same_major() {
        assert!(is_compatible_version("2.1.0", "2.0.0").unwrap());
    }

    #[test]
    fn test_incompatible_across_major_line() {
        assert!(!is_compatible_version("3.0.0", "2.5.0").unwrap());
    }

    #[test]
    fn test_incompatible_older_available() {
        assert!(!is_compatible_version("1.0.0", "1.5.0").unwrap());
    }

    #[test]
    fn test_equal_strings_always_compatible() {
        assert!(is_compatible_version("2.0.0", "2.0.0").unwrap());
        // Even unparsable strings are compatible when equal
        assert!(is_compatible_version("x", "x").unwrap());
    }

    #[test]
    fn test_unparsable_comparison_is_hard_error() {
        let result = is_compatible_version("x", "1.0.0");
        assert!(matches!(
            result.unwrap_err(),
            ArtificerError::InvalidDependencyVersion { .. }
        ));
    }

    #[test]
    fn test_snapshot_not_compatible_with_release() {
        // 2.0.0-SNAPSHOT orders below 2.0.0
        assert!(!is_compatible_version("2.0.0-SNAPSHOT", "2.0.0").unwrap());
        assert!(is_compatible_version("2.0.1", "2.0.0-SNAPSHOT").unwrap());
    }
}
