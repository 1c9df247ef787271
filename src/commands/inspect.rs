//! Inspect command implementation

use std::sync::Arc;

use console::Style;

use crate::artifact::{ArtifactDescriptor, BundleDependency, ClassLoaderConfiguration};
use crate::cli::InspectArgs;
use crate::error::Result;
use crate::factory::DescriptorFactory;
use crate::loader::DescriptorLoaderRepository;

pub fn run(args: InspectArgs) -> Result<()> {
    let repository = Arc::new(DescriptorLoaderRepository::with_standard_loaders());
    let factory = DescriptorFactory::for_type(repository, args.artifact_type);
    let descriptor = factory.create(&args.folder)?;

    println!();
    display_descriptor(&descriptor, 1);
    Ok(())
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

fn display_descriptor(descriptor: &ArtifactDescriptor, depth: usize) {
    let pad = indent(depth);
    println!("{pad}{}", Style::new().bold().yellow().apply_to(descriptor.name()));
    println!(
        "{pad}  {} {}",
        Style::new().bold().apply_to("Type:"),
        descriptor.artifact_type()
    );

    if let Some(bundle) = descriptor.bundle_descriptor() {
        println!("{pad}  {} {}", Style::new().bold().apply_to("Bundle:"), bundle);
        println!(
            "{pad}  {} {}",
            Style::new().bold().apply_to("File name:"),
            bundle.artifact_file_name()
        );
    }

    if let Some(version) = descriptor.min_runtime_version() {
        println!(
            "{pad}  {} {}",
            Style::new().bold().apply_to("Min runtime version:"),
            version
        );
    }
    if let Some(product) = descriptor.required_product() {
        println!(
            "{pad}  {} {}",
            Style::new().bold().apply_to("Required product:"),
            product
        );
    }

    if let Some(attributes) = descriptor.deployable_attributes() {
        if !attributes.config_resources().is_empty() {
            println!("{pad}  {}", Style::new().bold().apply_to("Config resources:"));
            for resource in attributes.config_resources() {
                println!("{pad}    {resource}");
            }
        }
        if !attributes.supported_java_versions().is_empty() {
            let versions: Vec<_> = attributes
                .supported_java_versions()
                .iter()
                .cloned()
                .collect();
            println!(
                "{pad}  {} {}",
                Style::new().bold().apply_to("Supported Java versions:"),
                versions.join(", ")
            );
        }
        if !attributes.redeployment_enabled() {
            println!(
                "{pad}  {} {}",
                Style::new().bold().apply_to("Redeployment:"),
                Style::new().red().apply_to("disabled")
            );
        }
    }

    display_class_loader_configuration(descriptor.class_loader_configuration(), depth);

    if let Some(attributes) = descriptor.deployable_attributes() {
        if !attributes.plugins().is_empty() {
            println!("{pad}  {}", Style::new().bold().apply_to("Plugins:"));
            for plugin in attributes.plugins() {
                display_descriptor(plugin, depth + 2);
            }
        }
    }
}

fn display_class_loader_configuration(configuration: &ClassLoaderConfiguration, depth: usize) {
    let pad = indent(depth);
    if configuration.is_null() {
        println!(
            "{pad}  {} {}",
            Style::new().bold().apply_to("Class loader:"),
            Style::new().dim().apply_to("none")
        );
        return;
    }

    println!("{pad}  {}", Style::new().bold().apply_to("Class loader:"));
    display_string_set(&pad, "Exported packages", configuration.exported_packages());
    display_string_set(&pad, "Exported resources", configuration.exported_resources());
    display_string_set(&pad, "Local packages", configuration.local_packages());
    display_string_set(&pad, "Local resources", configuration.local_resources());
    display_string_set(
        &pad,
        "Privileged packages",
        configuration.privileged_exported_packages(),
    );
    display_string_set(&pad, "Privileged artifacts", configuration.privileged_artifacts());

    if !configuration.locations().is_empty() {
        println!("{pad}    {}", Style::new().bold().apply_to("Locations:"));
        for location in configuration.locations() {
            println!("{pad}      {}", location.display());
        }
    }

    if !configuration.dependencies().is_empty() {
        println!("{pad}    {}", Style::new().bold().apply_to("Dependencies:"));
        for dependency in configuration.dependencies() {
            display_dependency(&pad, dependency);
        }
    }
}

fn display_string_set(pad: &str, label: &str, values: &std::collections::BTreeSet<String>) {
    if values.is_empty() {
        return;
    }
    println!("{pad}    {}", Style::new().bold().apply_to(format!("{label}:")));
    for value in values {
        println!("{pad}      {value}");
    }
}

fn display_dependency(pad: &str, dependency: &BundleDependency) {
    let plugin_marker = if dependency.descriptor().is_plugin() {
        format!(" {}", Style::new().green().apply_to("(plugin)"))
    } else {
        String::new()
    };
    println!(
        "{pad}      - {} [{}]{}",
        Style::new().cyan().apply_to(dependency.descriptor()),
        dependency.scope(),
        plugin_marker
    );
    for transitive in dependency.transitive_dependencies() {
        println!(
            "{pad}        {}",
            Style::new().dim().apply_to(transitive.descriptor())
        );
    }
}
