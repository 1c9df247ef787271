//! Fluent validator chain builder
//!
//! Each `validate_*` call records an intent; `build()` materializes only the
//! recorded validators, in a fixed order (min-version, product,
//! version-format, supported-JVM). Checks that need runtime context default
//! to the environment-derived suppliers in [`crate::runtime`] and can be
//! pinned explicitly through the `_with` variants.

use semver::Version;

use crate::artifact::Product;
use crate::error::Result;
use crate::runtime;
use crate::validation::validators::{
    MinRuntimeVersionValidator, ProductValidator, SupportedJavaVersionValidator,
    VersionFormatValidator, VersionSupplier,
};
use crate::validation::{ArtifactDescriptorValidator, CompositeValidator};

/// Accumulates validation intents and builds the composite validator
#[derive(Default)]
pub struct ArtifactDescriptorValidatorBuilder {
    min_runtime_version: bool,
    min_runtime_version_supplier: Option<VersionSupplier>,
    use_semantic_version: bool,
    runtime_product: bool,
    runtime_product_override: Option<Product>,
    version_format: bool,
    allow_missing_bundle_descriptor: bool,
    supported_java_versions: bool,
    running_java_version_override: Option<String>,
}

impl ArtifactDescriptorValidatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the artifact's minimum runtime version against the running one
    pub fn validate_min_runtime_version(mut self) -> Self {
        self.min_runtime_version = true;
        self
    }

    /// As [`Self::validate_min_runtime_version`], with an explicit version
    /// supplier
    pub fn validate_min_runtime_version_with(
        mut self,
        supplier: impl Fn() -> Result<Version> + Send + Sync + 'static,
    ) -> Self {
        self.min_runtime_version = true;
        self.min_runtime_version_supplier = Some(Box::new(supplier));
        self
    }

    /// Compare versions on the numeric triple only, ignoring qualifiers
    pub fn validate_min_runtime_version_using_semantic_version(mut self) -> Self {
        self.min_runtime_version = true;
        self.use_semantic_version = true;
        self
    }

    /// Check the artifact's required product against the running one
    pub fn validate_runtime_product(mut self) -> Self {
        self.runtime_product = true;
        self
    }

    /// As [`Self::validate_runtime_product`], against an explicit product
    pub fn validate_runtime_product_with(mut self, product: Product) -> Self {
        self.runtime_product = true;
        self.runtime_product_override = Some(product);
        self
    }

    /// Check that the bundle version string is well-formed
    pub fn validate_version_format(mut self) -> Self {
        self.version_format = true;
        self
    }

    /// Let the version-format check pass for artifacts without a bundle
    /// descriptor
    pub fn allow_missing_bundle_descriptor(mut self) -> Self {
        self.allow_missing_bundle_descriptor = true;
        self
    }

    /// Check the running Java version against the artifact's supported set
    pub fn validate_supported_java_versions(mut self) -> Self {
        self.supported_java_versions = true;
        self
    }

    /// As [`Self::validate_supported_java_versions`], against an explicit
    /// Java version
    pub fn validate_supported_java_versions_with(mut self, version: impl Into<String>) -> Self {
        self.supported_java_versions = true;
        self.running_java_version_override = Some(version.into());
        self
    }

    /// Materialize the recorded validators in their fixed order
    pub fn build(self) -> CompositeValidator {
        let mut validators: Vec<Box<dyn ArtifactDescriptorValidator>> = Vec::new();

        if self.min_runtime_version {
            let supplier = self
                .min_runtime_version_supplier
                .unwrap_or_else(|| Box::new(runtime::running_runtime_version));
            validators.push(Box::new(MinRuntimeVersionValidator::new(
                supplier,
                self.use_semantic_version,
            )));
        }

        if self.runtime_product {
            let supplier: Box<dyn Fn() -> Product + Send + Sync> =
                match self.runtime_product_override {
                    Some(product) => Box::new(move || product),
                    None => Box::new(runtime::running_product),
                };
            validators.push(Box::new(ProductValidator::new(supplier)));
        }

        if self.version_format {
            validators.push(Box::new(VersionFormatValidator::new(
                self.allow_missing_bundle_descriptor,
            )));
        }

        if self.supported_java_versions {
            let supplier: Box<dyn Fn() -> String + Send + Sync> =
                match self.running_java_version_override {
                    Some(version) => Box::new(move || version.clone()),
                    None => Box::new(runtime::running_java_version),
                };
            validators.push(Box::new(SupportedJavaVersionValidator::new(supplier)));
        }

        CompositeValidator::new(validators)
    }
}
