//! Integration tests for the validate command

mod common;

use common::{TestArtifact, artificer_cmd};
use predicates::prelude::*;

#[test]
fn test_validate_passes_with_explicit_context() {
    let artifact = TestArtifact::well_formed("billing");

    artificer_cmd()
        .arg("validate")
        .arg(&artifact.path)
        .args(["--runtime-version", "4.6.0", "--java-version", "17.0.2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("passed validation"));
}

#[test]
fn test_validate_fails_on_older_runtime() {
    let artifact = TestArtifact::well_formed("billing");

    artificer_cmd()
        .arg("validate")
        .arg(&artifact.path)
        .args(["--runtime-version", "4.1.0", "--java-version", "17"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires runtime version 4.4.0"));
}

#[test]
fn test_validate_fails_on_unsupported_java() {
    let artifact = TestArtifact::well_formed("billing");

    artificer_cmd()
        .arg("validate")
        .arg(&artifact.path)
        .args(["--runtime-version", "4.6.0", "--java-version", "21"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not support Java 21"));
}

#[test]
fn test_validate_fails_on_foreign_product() {
    let artifact = TestArtifact::with_manifest(
        "billing",
        r#"{"name": "billing", "requiredProduct": "MULE_EE"}"#,
    );

    artificer_cmd()
        .arg("validate")
        .arg(&artifact.path)
        .args(["--product", "--running-product", "MULE"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires product MULE_EE"));
}

#[test]
fn test_validate_selected_policy_only() {
    // The artifact requires a newer runtime than 4.1.0, but only the
    // product policy is selected
    let artifact = TestArtifact::well_formed("billing");

    artificer_cmd()
        .arg("validate")
        .arg(&artifact.path)
        .args(["--product", "--running-product", "MULE"])
        .assert()
        .success();
}

#[test]
fn test_validate_version_format_missing_descriptor() {
    let artifact = TestArtifact::with_manifest("billing", r#"{"name": "billing"}"#);

    artificer_cmd()
        .arg("validate")
        .arg(&artifact.path)
        .args(["--version-format"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no bundle descriptor"));

    artificer_cmd()
        .arg("validate")
        .arg(&artifact.path)
        .args(["--version-format", "--allow-missing-bundle-descriptor"])
        .assert()
        .success();
}

#[test]
fn test_validate_semantic_mode_accepts_snapshot_runtime() {
    let artifact = TestArtifact::well_formed("billing");

    artificer_cmd()
        .arg("validate")
        .arg(&artifact.path)
        .args([
            "--min-runtime-version",
            "--semantic",
            "--runtime-version",
            "4.4.0-SNAPSHOT",
        ])
        .assert()
        .success();

    artificer_cmd()
        .arg("validate")
        .arg(&artifact.path)
        .args(["--min-runtime-version", "--runtime-version", "4.4.0-SNAPSHOT"])
        .assert()
        .failure();
}

#[test]
fn test_validate_runtime_context_from_environment() {
    let artifact = TestArtifact::well_formed("billing");

    artificer_cmd()
        .arg("validate")
        .arg(&artifact.path)
        .env("ARTIFICER_RUNTIME_VERSION", "4.6.0")
        .env("ARTIFICER_JAVA_VERSION", "17")
        .env("ARTIFICER_PRODUCT", "MULE_EE")
        .assert()
        .success();

    artificer_cmd()
        .arg("validate")
        .arg(&artifact.path)
        .env("ARTIFICER_RUNTIME_VERSION", "4.1.0")
        .env("ARTIFICER_JAVA_VERSION", "17")
        .assert()
        .failure();
}

#[test]
fn test_validate_malformed_manifest() {
    let artifact = TestArtifact::with_manifest("billing", "{ not json");

    artificer_cmd()
        .arg("validate")
        .arg(&artifact.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse artifact manifest"));
}
