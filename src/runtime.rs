//! Running runtime context
//!
//! Validators compare artifacts against the runtime they would be deployed
//! into. The defaults below describe that target and can be overridden per
//! invocation through environment variables (or explicitly via the validator
//! builder's `_with` variants).

use std::env;

use semver::Version;

use crate::artifact::Product;
use crate::error::Result;
use crate::version::parse_version;

/// Environment variable overriding the target runtime version
pub const RUNTIME_VERSION_ENV: &str = "ARTIFICER_RUNTIME_VERSION";

/// Environment variable overriding the target product
pub const PRODUCT_ENV: &str = "ARTIFICER_PRODUCT";

/// Environment variable overriding the target Java version
pub const JAVA_VERSION_ENV: &str = "ARTIFICER_JAVA_VERSION";

/// Runtime version assumed when no override is present
pub const DEFAULT_RUNTIME_VERSION: &str = "4.9.0";

/// Java version assumed when no override is present
pub const DEFAULT_JAVA_VERSION: &str = "17";

/// The runtime version artifacts are validated against
///
/// # Errors
///
/// Returns `ArtificerError::InvalidDependencyVersion` when the environment
/// override is not a parseable version.
pub fn running_runtime_version() -> Result<Version> {
    match env::var(RUNTIME_VERSION_ENV) {
        Ok(value) => parse_version(&value),
        Err(_) => parse_version(DEFAULT_RUNTIME_VERSION),
    }
}

/// The product artifacts are validated against
pub fn running_product() -> Product {
    env::var(PRODUCT_ENV)
        .ok()
        .and_then(|value| Product::parse(&value))
        .unwrap_or(Product::Mule)
}

/// The Java version artifacts are validated against
pub fn running_java_version() -> String {
    env::var(JAVA_VERSION_ENV).unwrap_or_else(|_| DEFAULT_JAVA_VERSION.to_string())
}
