//! Integration tests for the inspect command

mod common;

use common::{TestArtifact, artificer_cmd};
use predicates::prelude::*;

#[test]
fn test_inspect_prints_coordinates() {
    let artifact = TestArtifact::well_formed("billing");

    artificer_cmd()
        .arg("inspect")
        .arg(&artifact.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("billing"))
        .stdout(predicate::str::contains("org.example:billing:1.2.0"))
        .stdout(predicate::str::contains("billing-1.2.0"))
        .stdout(predicate::str::contains("org.example.billing.api"));
}

#[test]
fn test_inspect_prints_isolation_partitions() {
    let artifact = TestArtifact::well_formed("billing");

    artificer_cmd()
        .arg("inspect")
        .arg(&artifact.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported packages"))
        .stdout(predicate::str::contains("Local packages"))
        .stdout(predicate::str::contains("org.example.billing.internal"));
}

#[test]
fn test_inspect_missing_manifest_fails() {
    let temp = tempfile::TempDir::new().unwrap();

    artificer_cmd()
        .arg("inspect")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("manifest not found"));
}

#[test]
fn test_inspect_unknown_loader_id_names_it() {
    let artifact = TestArtifact::with_manifest(
        "billing",
        r#"{
            "name": "billing",
            "bundleDescriptorLoader": {"id": "gradle", "attributes": {}}
        }"#,
    );

    artificer_cmd()
        .arg("inspect")
        .arg(&artifact.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("'gradle'"));
}

#[test]
fn test_inspect_plugin_artifact() {
    let artifact = TestArtifact::with_manifest(
        "http-connector",
        r#"{
            "name": "http-connector",
            "minMuleVersion": "4.1.0",
            "bundleDescriptorLoader": {
                "id": "maven",
                "attributes": {
                    "groupId": "org.example",
                    "artifactId": "http-connector",
                    "version": "1.5.0",
                    "classifier": "mule-plugin"
                }
            }
        }"#,
    );

    artificer_cmd()
        .args(["inspect", "--artifact-type", "plugin"])
        .arg(&artifact.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("http-connector"))
        .stdout(predicate::str::contains("plugin"))
        .stdout(predicate::str::contains("http-connector-1.5.0-mule-plugin"));
}

#[test]
fn test_inspect_domain_reports_default_config() {
    let artifact = TestArtifact::with_manifest("shared-domain", r#"{"name": "shared-domain"}"#);

    artificer_cmd()
        .args(["inspect", "--artifact-type", "domain"])
        .arg(&artifact.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("mule-domain-config.xml"));
}
