use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const ZOO: &str = "tests/fixtures/zoo.yaml";

fn pojogen(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pojogen"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to run pojogen")
}

fn fixture() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join(ZOO)
        .display()
        .to_string()
}

#[test]
fn list_as_json() {
    let tmp = tempfile::tempdir().unwrap();
    let out = pojogen(tmp.path(), &["list", "-i", &fixture(), "--format", "json"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let summaries: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let names: Vec<_> = summaries
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Order", "Address", "Animal", "Dog", "Size"]);
    assert_eq!(summaries[0]["is_response"], true);
    assert_eq!(summaries[3]["is_request"], true);
}

#[test]
fn generate_selected_schema() {
    let tmp = tempfile::tempdir().unwrap();
    let out = pojogen(
        tmp.path(),
        &[
            "generate",
            "-i",
            &fixture(),
            "-o",
            "model",
            "-s",
            "Order",
            "--package",
            "org.zoo.dto",
        ],
    );
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let model = tmp.path().join("model");
    let order = fs::read_to_string(model.join("OrderResponse.java")).unwrap();
    assert!(order.starts_with("package org.zoo.dto;\n"));
    assert!(model.join("Address.java").exists());
    assert!(!model.join("Dog.java").exists());
}

#[test]
fn generate_everything_by_default() {
    let tmp = tempfile::tempdir().unwrap();
    let out = pojogen(tmp.path(), &["generate", "-i", &fixture(), "-o", "all"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let mut files: Vec<_> = fs::read_dir(tmp.path().join("all"))
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    files.sort();
    assert_eq!(
        files,
        vec![
            "Address.java",
            "Animal.java",
            "DogRequest.java",
            "OrderResponse.java",
            "Size.java"
        ]
    );
}

#[test]
fn generate_uses_config_file() {
    let tmp = tempfile::tempdir().unwrap();
    let spec = tmp.path().join("zoo.yaml");
    fs::copy(fixture(), &spec).unwrap();
    fs::write(
        tmp.path().join(".pojogen.yaml"),
        "input: zoo.yaml\noutput: out\nschemas: [Dog]\noptions:\n  use_lombok: true\n",
    )
    .unwrap();

    let out = pojogen(tmp.path(), &["generate"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let dog = fs::read_to_string(tmp.path().join("out/DogRequest.java")).unwrap();
    assert!(dog.contains("@Data\n"));
    assert!(!dog.contains("getBreed"));
    assert!(!tmp.path().join("out/OrderResponse.java").exists());
}

#[test]
fn generate_reports_malformed_spec() {
    let tmp = tempfile::tempdir().unwrap();
    let spec = tmp.path().join("broken.json");
    fs::write(&spec, "{ \"openapi\": ").unwrap();
    let out = pojogen(
        tmp.path(),
        &["generate", "-i", spec.to_str().unwrap(), "-s", "Order"],
    );
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("failed to parse"));
}

#[test]
fn init_refuses_to_overwrite() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(pojogen(tmp.path(), &["init"]).status.success());
    let config = fs::read_to_string(tmp.path().join(".pojogen.yaml")).unwrap();
    assert!(config.contains("package_name: com.example.model"));

    assert!(!pojogen(tmp.path(), &["init"]).status.success());
    assert!(pojogen(tmp.path(), &["init", "--force"]).status.success());
}
