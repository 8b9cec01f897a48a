use assert_cmd::Command;
use predicates::prelude::*;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const ASSETS: [&str; 4] = [
    "ccw-darwin-arm64",
    "ccw-darwin-amd64",
    "ccw-linux-arm64",
    "ccw-linux-amd64",
];

const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

fn write_assets(dir: &Path, contents: [&[u8]; 4]) {
    for (name, data) in ASSETS.iter().zip(contents) {
        fs::write(dir.join(name), data).unwrap();
    }
}

fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

fn update_tap(tag: &str, dist: &Path, formula: &Path) -> assert_cmd::assert::Assert {
    Command::cargo_bin("update-tap")
        .unwrap()
        .env_remove("RUST_LOG")
        .arg(tag)
        .arg(dist)
        .arg(formula)
        .assert()
}

/// (os block, cpu branch, url, sha256) for every branch in the formula.
fn parse_branches(formula: &str) -> Vec<(String, String, String, String)> {
    let mut branches = Vec::new();
    let mut os = None;
    let mut cpu = None;
    let mut url = None;

    for line in formula.lines().map(str::trim) {
        if let Some(block) = line.strip_suffix(" do")
            && block.starts_with("on_")
        {
            os = Some(block.to_string());
        } else if line == "if Hardware::CPU.arm?" {
            cpu = Some("arm".to_string());
        } else if line == "else" {
            cpu = Some("intel".to_string());
        } else if let Some(rest) = line.strip_prefix("url ") {
            url = Some(rest.trim_matches('"').to_string());
        } else if let Some(rest) = line.strip_prefix("sha256 ") {
            branches.push((
                os.clone().unwrap(),
                cpu.clone().unwrap(),
                url.take().unwrap(),
                rest.trim_matches('"').to_string(),
            ));
        }
    }
    branches
}

#[test]
fn test_end_to_end_formula() {
    let dist = TempDir::new().unwrap();
    let contents: [&[u8]; 4] = [b"darwin arm", b"darwin intel", b"linux arm", b"linux intel"];
    write_assets(dist.path(), contents);
    let out = TempDir::new().unwrap();
    let formula_path = out.path().join("Formula").join("ccw.rb");

    update_tap("v2.0.0", dist.path(), &formula_path)
        .success()
        .stdout(predicate::str::is_empty());

    let formula = fs::read_to_string(&formula_path).unwrap();
    let branches = parse_branches(&formula);
    let expected = [
        ("on_macos", "arm", ASSETS[0], contents[0]),
        ("on_macos", "intel", ASSETS[1], contents[1]),
        ("on_linux", "arm", ASSETS[2], contents[2]),
        ("on_linux", "intel", ASSETS[3], contents[3]),
    ];
    assert_eq!(branches.len(), expected.len());
    for ((os, cpu, url, sha), (want_os, want_cpu, asset, data)) in branches.iter().zip(expected) {
        assert_eq!(os, want_os);
        assert_eq!(cpu, want_cpu);
        assert!(url.ends_with(asset), "{url} should end with {asset}");
        assert!(url.contains("/v2.0.0/"));
        assert_eq!(*sha, sha256_hex(data));
    }
    assert!(formula.contains("  version \"2.0.0\"\n"));
}

#[test]
fn test_empty_binaries_use_empty_digest() {
    let dist = TempDir::new().unwrap();
    write_assets(dist.path(), [b"", b"", b"", b""]);
    let out = TempDir::new().unwrap();
    let formula_path = out.path().join("ccw.rb");

    update_tap("v0.1.21", dist.path(), &formula_path).success();

    let formula = fs::read_to_string(&formula_path).unwrap();
    assert_eq!(formula.matches(EMPTY_SHA256).count(), 4);
    assert!(formula.contains("version \"0.1.21\""));
    assert_eq!(formula.matches("/releases/download/v0.1.21/").count(), 4);
}

#[test]
fn test_invalid_tag_fails_without_writing() {
    let dist = TempDir::new().unwrap();
    write_assets(dist.path(), [b"a", b"b", b"c", b"d"]);
    let out = TempDir::new().unwrap();
    let formula_path = out.path().join("Formula").join("ccw.rb");

    update_tap("0.1.21", dist.path(), &formula_path)
        .code(2)
        .stderr(predicate::str::contains("must start with 'v'"));

    assert!(!out.path().join("Formula").exists());
}

#[test]
fn test_missing_asset_is_named_and_formula_untouched() {
    for asset in ASSETS {
        let dist = TempDir::new().unwrap();
        write_assets(dist.path(), [b"a", b"b", b"c", b"d"]);
        fs::remove_file(dist.path().join(asset)).unwrap();
        let out = TempDir::new().unwrap();
        let formula_path = out.path().join("ccw.rb");
        fs::write(&formula_path, "class Ccw < Formula\nend\n").unwrap();

        update_tap("v1.2.3", dist.path(), &formula_path)
            .code(1)
            .stderr(predicate::str::contains("missing release asset"))
            .stderr(predicate::str::contains(asset));

        assert_eq!(
            fs::read_to_string(&formula_path).unwrap(),
            "class Ccw < Formula\nend\n",
            "formula changed with {asset} missing"
        );
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 1);
    }
}

#[test]
fn test_missing_asset_does_not_create_formula() {
    let dist = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let formula_path = out.path().join("Formula").join("ccw.rb");

    update_tap("v1.2.3", dist.path(), &formula_path)
        .code(1)
        .stderr(predicate::str::contains("ccw-darwin-arm64"));

    assert!(!formula_path.exists());
}

#[test]
fn test_runs_are_idempotent() {
    let dist = TempDir::new().unwrap();
    write_assets(dist.path(), [b"1", b"2", b"3", b"4"]);
    let out = TempDir::new().unwrap();
    let formula_path = out.path().join("ccw.rb");

    update_tap("v1.0.0", dist.path(), &formula_path).success();
    let first = fs::read(&formula_path).unwrap();
    update_tap("v1.0.0", dist.path(), &formula_path).success();
    let second = fs::read(&formula_path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_extra_files_in_dist_are_ignored() {
    let dist = TempDir::new().unwrap();
    write_assets(dist.path(), [b"1", b"2", b"3", b"4"]);
    fs::write(dist.path().join("checksums.txt"), "extra").unwrap();
    let out = TempDir::new().unwrap();

    update_tap("v1.0.0", dist.path(), &out.path().join("ccw.rb")).success();
}

#[test]
fn test_missing_arguments_is_usage_error() {
    Command::cargo_bin("update-tap")
        .unwrap()
        .arg("v1.0.0")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}
