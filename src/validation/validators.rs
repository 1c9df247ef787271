//! Concrete validator policies

use semver::Version;

use crate::artifact::{ArtifactDescriptor, Product};
use crate::error::{
    Result, bundle_descriptor_missing, malformed_bundle_version, product_mismatch,
    runtime_version_too_old, unsupported_java_version,
};
use crate::validation::ArtifactDescriptorValidator;
use crate::version::parse_version;

/// Supplier of the runtime version artifacts are checked against
pub type VersionSupplier = Box<dyn Fn() -> Result<Version> + Send + Sync>;

/// Fails when the artifact requires a newer runtime than the running one
pub struct MinRuntimeVersionValidator {
    running_version: VersionSupplier,
    semantic: bool,
}

impl MinRuntimeVersionValidator {
    pub fn new(running_version: VersionSupplier, semantic: bool) -> Self {
        MinRuntimeVersionValidator {
            running_version,
            semantic,
        }
    }
}

impl ArtifactDescriptorValidator for MinRuntimeVersionValidator {
    fn validate(&self, descriptor: &ArtifactDescriptor) -> Result<()> {
        let Some(required) = descriptor.min_runtime_version() else {
            return Ok(());
        };
        let running = (self.running_version)()?;

        // Semantic mode compares only the numeric triple, ignoring
        // pre-release qualifiers on either side
        let satisfied = if self.semantic {
            numeric_triple(&running) >= numeric_triple(required)
        } else {
            &running >= required
        };

        if satisfied {
            Ok(())
        } else {
            Err(runtime_version_too_old(
                descriptor.name(),
                required.to_string(),
                running.to_string(),
            ))
        }
    }
}

fn numeric_triple(version: &Version) -> Version {
    Version::new(version.major, version.minor, version.patch)
}

/// Fails when the artifact requires a product the runtime is not
pub struct ProductValidator {
    running_product: Box<dyn Fn() -> Product + Send + Sync>,
}

impl ProductValidator {
    pub fn new(running_product: Box<dyn Fn() -> Product + Send + Sync>) -> Self {
        ProductValidator { running_product }
    }
}

impl ArtifactDescriptorValidator for ProductValidator {
    fn validate(&self, descriptor: &ArtifactDescriptor) -> Result<()> {
        let Some(required) = descriptor.required_product() else {
            return Ok(());
        };
        let running = (self.running_product)();
        if required.runs_on(running) {
            Ok(())
        } else {
            Err(product_mismatch(
                descriptor.name(),
                required.to_string(),
                running.to_string(),
            ))
        }
    }
}

/// Fails when the bundle version string is not well-formed
pub struct VersionFormatValidator {
    allow_missing_bundle_descriptor: bool,
}

impl VersionFormatValidator {
    pub fn new(allow_missing_bundle_descriptor: bool) -> Self {
        VersionFormatValidator {
            allow_missing_bundle_descriptor,
        }
    }
}

impl ArtifactDescriptorValidator for VersionFormatValidator {
    fn validate(&self, descriptor: &ArtifactDescriptor) -> Result<()> {
        let Some(bundle) = descriptor.bundle_descriptor() else {
            if self.allow_missing_bundle_descriptor {
                return Ok(());
            }
            return Err(bundle_descriptor_missing(descriptor.name()));
        };

        parse_version(bundle.version())
            .map(|_| ())
            .map_err(|e| malformed_bundle_version(descriptor.name(), e.to_string()))
    }
}

/// Fails when the running Java version is not in the artifact's declared
/// supported set
pub struct SupportedJavaVersionValidator {
    running_java_version: Box<dyn Fn() -> String + Send + Sync>,
}

impl SupportedJavaVersionValidator {
    pub fn new(running_java_version: Box<dyn Fn() -> String + Send + Sync>) -> Self {
        SupportedJavaVersionValidator {
            running_java_version,
        }
    }
}

impl ArtifactDescriptorValidator for SupportedJavaVersionValidator {
    fn validate(&self, descriptor: &ArtifactDescriptor) -> Result<()> {
        let Some(attributes) = descriptor.deployable_attributes() else {
            return Ok(());
        };
        let supported = attributes.supported_java_versions();
        // An artifact declaring nothing runs anywhere
        if supported.is_empty() {
            return Ok(());
        }

        let running = (self.running_java_version)();
        if supported
            .iter()
            .any(|candidate| java_version_matches(candidate, &running))
        {
            Ok(())
        } else {
            let supported_list = supported.iter().cloned().collect::<Vec<_>>().join(", ");
            Err(unsupported_java_version(
                descriptor.name(),
                running,
                supported_list,
            ))
        }
    }
}

/// A declared version matches when its dotted tokens are a prefix of the
/// running version's tokens: "17" covers "17.0.2", "1.8" covers "1.8.0"
fn java_version_matches(declared: &str, running: &str) -> bool {
    if declared == running {
        return true;
    }
    let declared_tokens: Vec<&str> = declared.split('.').collect();
    let running_tokens: Vec<&str> = running.split('.').collect();
    running_tokens.len() >= declared_tokens.len()
        && declared_tokens
            .iter()
            .zip(&running_tokens)
            .all(|(declared_token, running_token)| declared_token == running_token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::BundleDescriptor;
    use crate::error::ArtificerError;

    fn fixed_version(version: &str) -> VersionSupplier {
        let version = parse_version(version).unwrap();
        Box::new(move || Ok(version.clone()))
    }

    fn descriptor_requiring(min_version: &str) -> ArtifactDescriptor {
        let mut descriptor = ArtifactDescriptor::application("billing").unwrap();
        descriptor.set_min_runtime_version(parse_version(min_version).unwrap());
        descriptor
    }

    #[test]
    fn test_min_version_passes_on_newer_runtime() {
        let validator = MinRuntimeVersionValidator::new(fixed_version("4.6.0"), false);
        assert!(validator.validate(&descriptor_requiring("4.4.0")).is_ok());
    }

    #[test]
    fn test_min_version_fails_on_older_runtime() {
        let validator = MinRuntimeVersionValidator::new(fixed_version("4.4.0"), false);
        let result = validator.validate(&descriptor_requiring("4.6.0"));
        assert!(matches!(
            result.unwrap_err(),
            ArtificerError::RuntimeVersionTooOld { .. }
        ));
    }

    #[test]
    fn test_min_version_passes_without_declaration() {
        let validator = MinRuntimeVersionValidator::new(fixed_version("4.0.0"), false);
        let descriptor = ArtifactDescriptor::application("billing").unwrap();
        assert!(validator.validate(&descriptor).is_ok());
    }

    #[test]
    fn test_semantic_mode_ignores_qualifiers() {
        // Exact comparison: 4.6.0-SNAPSHOT < 4.6.0, so the check fails
        let exact = MinRuntimeVersionValidator::new(fixed_version("4.6.0-SNAPSHOT"), false);
        assert!(exact.validate(&descriptor_requiring("4.6.0")).is_err());

        // Semantic comparison strips the qualifier and passes
        let semantic = MinRuntimeVersionValidator::new(fixed_version("4.6.0-SNAPSHOT"), true);
        assert!(semantic.validate(&descriptor_requiring("4.6.0")).is_ok());
    }

    #[test]
    fn test_product_validator() {
        let validator = ProductValidator::new(Box::new(|| Product::Mule));

        let mut ee_artifact = ArtifactDescriptor::application("billing").unwrap();
        ee_artifact.set_required_product(Product::MuleEe);
        assert!(matches!(
            validator.validate(&ee_artifact).unwrap_err(),
            ArtificerError::ProductMismatch { .. }
        ));

        let mut base_artifact = ArtifactDescriptor::application("billing").unwrap();
        base_artifact.set_required_product(Product::Mule);
        assert!(validator.validate(&base_artifact).is_ok());

        let unset = ArtifactDescriptor::application("billing").unwrap();
        assert!(validator.validate(&unset).is_ok());
    }

    #[test]
    fn test_base_product_artifact_runs_on_ee() {
        let validator = ProductValidator::new(Box::new(|| Product::MuleEe));
        let mut descriptor = ArtifactDescriptor::application("billing").unwrap();
        descriptor.set_required_product(Product::Mule);
        assert!(validator.validate(&descriptor).is_ok());
    }

    fn with_bundle_version(version: &str) -> ArtifactDescriptor {
        let mut descriptor = ArtifactDescriptor::application("billing").unwrap();
        descriptor.set_bundle_descriptor(
            BundleDescriptor::builder()
                .group_id("org.example")
                .artifact_id("billing")
                .version(version)
                .build()
                .unwrap(),
        );
        descriptor
    }

    #[test]
    fn test_version_format_accepts_well_formed() {
        let validator = VersionFormatValidator::new(false);
        assert!(validator.validate(&with_bundle_version("1.2.0")).is_ok());
        assert!(validator.validate(&with_bundle_version("1.2.0-SNAPSHOT")).is_ok());
    }

    #[test]
    fn test_version_format_rejects_malformed() {
        let validator = VersionFormatValidator::new(false);
        let result = validator.validate(&with_bundle_version("1.x"));
        assert!(matches!(
            result.unwrap_err(),
            ArtificerError::MalformedBundleVersion { .. }
        ));
    }

    #[test]
    fn test_version_format_missing_bundle_descriptor() {
        let descriptor = ArtifactDescriptor::application("billing").unwrap();

        let strict = VersionFormatValidator::new(false);
        assert!(matches!(
            strict.validate(&descriptor).unwrap_err(),
            ArtificerError::BundleDescriptorMissing { .. }
        ));

        let lenient = VersionFormatValidator::new(true);
        assert!(lenient.validate(&descriptor).is_ok());
    }

    fn supporting_java(versions: &[&str]) -> ArtifactDescriptor {
        let mut descriptor = ArtifactDescriptor::application("billing").unwrap();
        descriptor
            .deployable_attributes_mut()
            .unwrap()
            .set_supported_java_versions(versions.iter().map(ToString::to_string));
        descriptor
    }

    #[test]
    fn test_supported_java_version_match() {
        let validator =
            SupportedJavaVersionValidator::new(Box::new(|| "17.0.2".to_string()));
        assert!(validator.validate(&supporting_java(&["11", "17"])).is_ok());
    }

    #[test]
    fn test_supported_java_version_mismatch() {
        let validator = SupportedJavaVersionValidator::new(Box::new(|| "21".to_string()));
        let result = validator.validate(&supporting_java(&["11", "17"]));
        match result.unwrap_err() {
            ArtificerError::UnsupportedJavaVersion { supported, .. } => {
                assert_eq!(supported, "11, 17");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_supported_set_passes() {
        let validator = SupportedJavaVersionValidator::new(Box::new(|| "21".to_string()));
        assert!(validator.validate(&supporting_java(&[])).is_ok());
    }

    #[test]
    fn test_plugin_descriptor_passes_java_check() {
        let validator = SupportedJavaVersionValidator::new(Box::new(|| "21".to_string()));
        let descriptor = ArtifactDescriptor::plugin("http").unwrap();
        assert!(validator.validate(&descriptor).is_ok());
    }

    #[test]
    fn test_java_version_matching_rules() {
        assert!(java_version_matches("17", "17.0.2"));
        assert!(java_version_matches("1.8", "1.8.0"));
        assert!(java_version_matches("17", "17"));
        assert!(!java_version_matches("17", "1.7"));
        assert!(!java_version_matches("1.8", "18"));
        assert!(!java_version_matches("17.0.2", "17"));
    }
}
