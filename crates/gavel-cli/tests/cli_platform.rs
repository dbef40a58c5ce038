use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const PLATFORM: &str = r#"
enforced-imports = ["io.grpc:grpc-bom:1.35.0", "org.junit:junit-bom:5.7.0"]
dependencies = ["junit:junit:4.13.1"]

[platform]
name = "cli-platform"

[[dependency-sets]]
group = "org.mockito"
version = "3.7.7"
modules = ["mockito-core", "mockito-junit-jupiter"]
"#;

#[allow(deprecated)]
fn gavel_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gavel").unwrap();
    cmd.env("GAVEL_HOME", home.path())
        .env_remove("GAVEL_MANIFEST")
        .env_remove("RUST_LOG");
    cmd
}

fn project_with(contents: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Platform.toml"), contents).unwrap();
    tmp
}

#[test]
fn test_without_manifest_fails() {
    let home = TempDir::new().unwrap();
    let tmp = TempDir::new().unwrap();

    gavel_cmd(&home)
        .current_dir(tmp.path())
        .args(["check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not find Platform.toml"));
}

#[test]
fn test_check_prints_summary() {
    let home = TempDir::new().unwrap();
    let project = project_with(PLATFORM);

    gavel_cmd(&home)
        .current_dir(project.path())
        .args(["check"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Platform cli-platform OK: 2 enforced imports, 3 constraints, 4 groups",
        ));
}

#[test]
fn test_check_finds_manifest_in_parent() {
    let home = TempDir::new().unwrap();
    let project = project_with(PLATFORM);
    let nested = project.path().join("sub").join("module");
    fs::create_dir_all(&nested).unwrap();

    gavel_cmd(&home)
        .current_dir(&nested)
        .args(["check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Platform cli-platform OK"));
}

#[test]
fn test_explicit_manifest_flag() {
    let home = TempDir::new().unwrap();
    let project = project_with(PLATFORM);
    let elsewhere = TempDir::new().unwrap();

    gavel_cmd(&home)
        .current_dir(elsewhere.path())
        .arg("--manifest")
        .arg(project.path().join("Platform.toml"))
        .args(["version", "org.mockito"])
        .assert()
        .success()
        .stdout("3.7.7\n");
}

#[test]
fn test_version_unknown_group_fails() {
    let home = TempDir::new().unwrap();
    let project = project_with(PLATFORM);

    gavel_cmd(&home)
        .current_dir(project.path())
        .args(["version", "com.example"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No version for group"));
}

#[test]
fn test_malformed_coordinate_fails_with_location() {
    let home = TempDir::new().unwrap();
    let project = project_with("dependencies = [\"junit:junit\"]\n[platform]\nname = \"bad\"\n");

    gavel_cmd(&home)
        .current_dir(project.path())
        .args(["check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("junit:junit"))
        .stderr(predicate::str::contains("dependencies[0]"));
}

#[test]
fn test_duplicate_member_fails() {
    let home = TempDir::new().unwrap();
    let project = project_with(
        "[platform]\nname = \"dup\"\n\n[[dependency-sets]]\ngroup = \"x\"\nversion = \"1.0\"\nmodules = [\"m\", \"m\"]\n",
    );

    gavel_cmd(&home)
        .current_dir(project.path())
        .args(["check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("more than once"));
}

#[test]
fn test_check_deny_dynamic() {
    let home = TempDir::new().unwrap();
    let project = project_with("dependencies = [\"g:a:1.+\"]\n[platform]\nname = \"dyn\"\n");

    gavel_cmd(&home)
        .current_dir(project.path())
        .args(["check"])
        .assert()
        .success();

    gavel_cmd(&home)
        .current_dir(project.path())
        .args(["check", "--deny-dynamic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dynamic version"));
}

#[test]
fn test_global_config_deny_dynamic() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("config.toml"),
        "[catalog]\ndeny-dynamic = true\n",
    )
    .unwrap();
    let project = project_with("dependencies = [\"g:a:latest.release\"]\n[platform]\nname = \"dyn\"\n");

    gavel_cmd(&home)
        .current_dir(project.path())
        .args(["check"])
        .assert()
        .failure();
}

#[test]
fn test_show_text() {
    let home = TempDir::new().unwrap();
    let project = project_with(PLATFORM);

    gavel_cmd(&home)
        .current_dir(project.path())
        .args(["show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Enforced imports (2):"))
        .stdout(predicate::str::contains("org.mockito:mockito-core:3.7.7"))
        .stdout(predicate::str::contains("Catalog (4 groups):"));
}

#[test]
fn test_show_json() {
    let home = TempDir::new().unwrap();
    let project = project_with(PLATFORM);

    gavel_cmd(&home)
        .current_dir(project.path())
        .args(["show", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"cli-platform\""))
        .stdout(predicate::str::contains("\"io.grpc:grpc-bom:1.35.0\""));
}

#[test]
fn test_export_writes_versions_json() {
    let home = TempDir::new().unwrap();
    let project = project_with(PLATFORM);

    gavel_cmd(&home)
        .current_dir(project.path())
        .args(["export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 4 group versions"));

    let written = fs::read_to_string(project.path().join("versions.json")).unwrap();
    assert!(written.contains("\"org.mockito\": \"3.7.7\""), "got: {written}");
}

#[test]
fn test_export_to_custom_output() {
    let home = TempDir::new().unwrap();
    let project = project_with(PLATFORM);
    let target = project.path().join("out").join("catalog.json");

    gavel_cmd(&home)
        .current_dir(project.path())
        .args(["export", "-o"])
        .arg(&target)
        .assert()
        .success();

    assert!(target.is_file());
    assert!(!project.path().join("versions.json").exists());
}
