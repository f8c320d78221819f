mod common;

use assert_cmd::Command;
use predicates::prelude::*;

fn phpcu() -> Command {
    let mut cmd = Command::cargo_bin("phpcu").unwrap();
    cmd.env_remove("RUST_LOG").arg("--no-color");
    cmd
}

/// Test that --help flag works
#[test]
fn test_help_flag() {
    phpcu()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Check for outdated Composer dependencies"))
        .stdout(predicate::str::contains("--update"))
        .stdout(predicate::str::contains("--level"))
        .stdout(predicate::str::contains("--no-dev"))
        .stdout(predicate::str::contains("--registry"));
}

/// Test that --version flag works
#[test]
fn test_version_flag() {
    phpcu()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("phpcu"));
}

/// Test running on a directory without composer.json
#[test]
fn test_missing_manifest() {
    let project = common::TempProject::new();

    phpcu()
        .arg(project.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unable to find a composer.json"));
}

/// Test running on non-existent directory
#[test]
fn test_nonexistent_directory() {
    phpcu().arg("/nonexistent/path/to/project").assert().failure();
}

#[test]
fn test_invalid_json() {
    let project = common::TempProject::with_manifest("{ \"require\": ");

    phpcu()
        .arg(project.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not contain valid JSON"));
}

#[test]
fn test_manifest_without_sections() {
    let project = common::TempProject::with_manifest(r#"{"name": "acme/app"}"#);

    phpcu()
        .arg(project.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("«require» nor «require-dev»"));
}

/// Platform packages are never looked up
#[test]
fn test_platform_only_manifest() {
    let project = common::TempProject::with_manifest(common::platform_only_composer_json());

    phpcu()
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 0 packages in «require» section."))
        .stdout(predicate::str::contains("All packages are up to date"));
}

/// A path ending in composer.json is accepted as is
#[test]
fn test_direct_manifest_path() {
    let project = common::TempProject::with_manifest(common::platform_only_composer_json());

    phpcu()
        .arg(project.file_path("composer.json"))
        .assert()
        .success();
}

/// Unreachable registry: every lookup fails, the run still completes
#[test]
fn test_unreachable_registry_is_not_fatal() {
    let project = common::TempProject::with_manifest(common::sample_composer_json());

    phpcu()
        .arg(project.path())
        .arg("-u")
        .env("PHPCU_REGISTRY", "http://127.0.0.1:9")
        .assert()
        .success()
        .stdout(predicate::str::contains("Some packages could not be checked"))
        .stdout(predicate::str::contains("monolog/monolog"))
        .stdout(predicate::str::contains("0 packages will be updated"));

    assert_eq!(project.manifest(), common::sample_composer_json());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_report_without_update() {
    let server = common::sample_packagist().await;
    let project = common::TempProject::with_manifest(common::sample_composer_json());

    phpcu()
        .arg(project.path())
        .arg("--registry")
        .arg(server.uri())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 packages in «require» section."))
        .stdout(predicate::str::contains("Found 1 packages in «require-dev» section."))
        .stdout(predicate::str::contains("^2.9 → ^3.8"))
        .stdout(predicate::str::contains("6.4.* → 7.2.*"))
        .stdout(predicate::str::contains("^3.0.0 → ^3.0.2"))
        .stdout(predicate::str::contains("~10.5 → ~11.5"))
        .stdout(predicate::str::contains("There are 4 packages to update."));

    // Files are not modified without --update
    assert_eq!(project.manifest(), common::sample_composer_json());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_all() {
    let server = common::sample_packagist().await;
    let project = common::TempProject::with_manifest(common::sample_composer_json());

    phpcu()
        .arg(project.path())
        .args(["-u", "--registry", &server.uri()])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 packages will be updated"));

    let manifest = project.manifest();
    assert!(manifest.contains(r#""monolog/monolog": "^3.8""#), "{manifest}");
    assert!(manifest.contains(r#""symfony/console": "7.2.*""#), "{manifest}");
    assert!(manifest.contains(r#""psr/log": "^3.0.2""#), "{manifest}");
    assert!(manifest.contains(r#""phpunit/phpunit": "~11.5""#), "{manifest}");
    assert!(manifest.contains(r#""php": ">=8.2""#), "{manifest}");
    assert!(manifest.contains(r#""require": "7.2.*""#), "{manifest}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_patch_only() {
    let server = common::sample_packagist().await;
    let project = common::TempProject::with_manifest(common::sample_composer_json());

    phpcu()
        .arg(project.path())
        .args(["-u", "-l", "patch", "--registry", &server.uri()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 packages will be updated"));

    let manifest = project.manifest();
    assert!(manifest.contains(r#""psr/log": "^3.0.2""#), "{manifest}");
    assert!(manifest.contains(r#""monolog/monolog": "^2.9""#), "{manifest}");
    assert!(manifest.contains(r#""require": "6.4.*""#), "{manifest}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_without_dev() {
    let server = common::sample_packagist().await;
    let project = common::TempProject::with_manifest(common::sample_composer_json());

    phpcu()
        .arg(project.path())
        .args(["-u", "--no-dev", "--registry", &server.uri()])
        .assert()
        .success()
        .stdout(predicate::str::contains("«require-dev»").not())
        .stdout(predicate::str::contains("3 packages will be updated"));

    let manifest = project.manifest();
    assert!(manifest.contains(r#""phpunit/phpunit": "~10.5""#), "{manifest}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unknown_package_is_reported_after_scan() {
    let server = common::mock_packagist(&[("monolog/monolog", &["3.8.1"])]).await;
    let project = common::TempProject::with_manifest(
        r#"{"require": {"acme/ghost": "^1.0", "monolog/monolog": "^2.9"}}"#,
    );

    phpcu()
        .arg(project.path())
        .args(["--registry", &server.uri()])
        .assert()
        .success()
        .stdout(predicate::str::contains("«acme/ghost» is not a valid composer package"))
        .stdout(predicate::str::contains("^2.9 → ^3.8"));
}

#[cfg(unix)]
#[tokio::test(flavor = "multi_thread")]
async fn test_read_only_manifest_fails_after_report() {
    use std::fs;

    let server = common::sample_packagist().await;
    let project = common::TempProject::with_manifest(common::sample_composer_json());
    let manifest_path = project.file_path("composer.json");

    let mut permissions = fs::metadata(&manifest_path).unwrap().permissions();
    permissions.set_readonly(true);
    fs::set_permissions(&manifest_path, permissions).unwrap();

    phpcu()
        .arg(project.path())
        .args(["-u", "--registry", &server.uri()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("There are 4 packages to update."))
        .stderr(predicate::str::contains("is not writable"));

    assert_eq!(project.manifest(), common::sample_composer_json());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_bundle_minor_update_keeps_platform_requirement() {
    let server = common::mock_packagist(&[
        ("symfony/framework-bundle", &["v6.4.16", "v7.2.1"]),
        ("symfony/monolog-bundle", &["v3.8.0", "v3.10.0"]),
    ])
    .await;
    let project = common::TempProject::with_manifest(
        r#"{
    "require": {
        "symfony/framework-bundle": "6.4.*",
        "symfony/monolog-bundle": "^3.8"
    },
    "extra": {
        "symfony": {
            "require": "6.4.*"
        }
    }
}
"#,
    );

    phpcu()
        .arg(project.path())
        .args(["-u", "-l", "minor", "--registry", &server.uri()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 packages will be updated"));

    let manifest = project.manifest();
    assert!(manifest.contains(r#""symfony/monolog-bundle": "^3.10""#), "{manifest}");
    assert!(manifest.contains(r#""symfony/framework-bundle": "6.4.*""#), "{manifest}");
    assert!(manifest.contains(r#""require": "6.4.*""#), "{manifest}");
}
