//! Validate command implementation

use std::sync::Arc;

use console::Style;

use crate::cli::ValidateArgs;
use crate::error::Result;
use crate::factory::DescriptorFactory;
use crate::loader::DescriptorLoaderRepository;
use crate::validation::{
    ArtifactDescriptorValidator, ArtifactDescriptorValidatorBuilder, CompositeValidator,
};
use crate::version::parse_version;

pub fn run(args: ValidateArgs) -> Result<()> {
    let repository = Arc::new(DescriptorLoaderRepository::with_standard_loaders());
    let factory = DescriptorFactory::for_type(repository, args.artifact_type);
    let descriptor = factory.create(&args.folder)?;

    let validator = build_validator(&args)?;
    validator.validate(&descriptor)?;

    println!(
        "{} artifact '{}' passed validation",
        Style::new().green().bold().apply_to("OK"),
        descriptor.name()
    );
    Ok(())
}

fn build_validator(args: &ValidateArgs) -> Result<CompositeValidator> {
    // Individual policy flags select checks; with none given, every check runs
    let run_all = !args.has_policy_selection();
    let mut builder = ArtifactDescriptorValidatorBuilder::new();

    if run_all || args.min_runtime_version {
        builder = match &args.runtime_version {
            Some(version) => {
                let version = parse_version(version)?;
                builder.validate_min_runtime_version_with(move || Ok(version.clone()))
            }
            None => builder.validate_min_runtime_version(),
        };
        if args.semantic {
            builder = builder.validate_min_runtime_version_using_semantic_version();
        }
    }

    if run_all || args.product {
        builder = match args.running_product {
            Some(product) => builder.validate_runtime_product_with(product),
            None => builder.validate_runtime_product(),
        };
    }

    if run_all || args.version_format {
        builder = builder.validate_version_format();
        if args.allow_missing_bundle_descriptor {
            builder = builder.allow_missing_bundle_descriptor();
        }
    }

    if run_all || args.supported_java {
        builder = match &args.java_version {
            Some(version) => builder.validate_supported_java_versions_with(version.clone()),
            None => builder.validate_supported_java_versions(),
        };
    }

    Ok(builder.build())
}
