//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::artifact::{ArtifactType, Product};

/// Artificer - artifact descriptor toolkit
///
/// Resolve, inspect and validate descriptors of modular runtime artifacts.
#[derive(Parser, Debug)]
#[command(
    name = "artificer",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Descriptor model and validation toolkit for modular runtime artifacts",
    long_about = "Artificer resolves packaged deployable units (applications, domains, plugins) \
                  into fully resolved descriptors: bundle coordinates, dependency graph and \
                  classloader isolation contract, with composable validation policies.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  artificer inspect ./apps/billing\n    \
                  artificer inspect ./plugins/http-connector --artifact-type plugin\n    \
                  artificer validate ./apps/billing --runtime-version 4.6.0\n    \
                  artificer compat 2.1.0 2.0.0"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve an artifact folder and print its descriptor
    Inspect(InspectArgs),

    /// Resolve an artifact folder and run validation policies against it
    Validate(ValidateArgs),

    /// Check bundle version compatibility
    Compat(CompatArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

fn artifact_type_parser(value: &str) -> Result<ArtifactType, String> {
    ArtifactType::parse(value)
        .ok_or_else(|| format!("'{value}' is not an artifact type (application, domain, plugin)"))
}

fn product_parser(value: &str) -> Result<Product, String> {
    Product::parse(value).ok_or_else(|| format!("'{value}' is not a product (MULE, MULE_EE)"))
}

/// Arguments for the inspect command
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Artifact folder to inspect
    pub folder: PathBuf,

    /// Artifact type the folder packages
    #[arg(long, short = 't', value_parser = artifact_type_parser, default_value = "application")]
    pub artifact_type: ArtifactType,
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Run every policy with explicit runtime context:\n    \
                  artificer validate ./apps/billing --runtime-version 4.6.0 --java-version 17\n\n\
                  Run selected policies only:\n    \
                  artificer validate ./apps/billing --product --version-format\n\n\
                  Tooling context without bundle coordinates:\n    \
                  artificer validate ./apps/billing --version-format --allow-missing-bundle-descriptor")]
pub struct ValidateArgs {
    /// Artifact folder to validate
    pub folder: PathBuf,

    /// Artifact type the folder packages
    #[arg(long, short = 't', value_parser = artifact_type_parser, default_value = "application")]
    pub artifact_type: ArtifactType,

    /// Check the declared minimum runtime version (all policies run when no
    /// policy flag is given)
    #[arg(long)]
    pub min_runtime_version: bool,

    /// Compare runtime versions on the numeric triple, ignoring qualifiers
    #[arg(long)]
    pub semantic: bool,

    /// Check the required product
    #[arg(long)]
    pub product: bool,

    /// Check the bundle version format
    #[arg(long)]
    pub version_format: bool,

    /// Let the version-format policy pass when no bundle descriptor is present
    #[arg(long)]
    pub allow_missing_bundle_descriptor: bool,

    /// Check the supported Java versions
    #[arg(long)]
    pub supported_java: bool,

    /// Runtime version to validate against (defaults to ARTIFICER_RUNTIME_VERSION)
    #[arg(long, value_name = "VERSION")]
    pub runtime_version: Option<String>,

    /// Product to validate against (defaults to ARTIFICER_PRODUCT)
    #[arg(long, value_parser = product_parser, value_name = "PRODUCT")]
    pub running_product: Option<Product>,

    /// Java version to validate against (defaults to ARTIFICER_JAVA_VERSION)
    #[arg(long, value_name = "VERSION")]
    pub java_version: Option<String>,
}

impl ValidateArgs {
    /// Whether any individual policy flag was given
    pub fn has_policy_selection(&self) -> bool {
        self.min_runtime_version || self.product || self.version_format || self.supported_java
    }
}

/// Arguments for the compat command
#[derive(Parser, Debug)]
pub struct CompatArgs {
    /// Version that is available
    pub available: String,

    /// Version that is expected
    pub expected: String,
}

/// Arguments for the completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: String,
}
