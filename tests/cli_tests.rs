//! End-to-end tests of the `twc` binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn twc(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_twc"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("should run twc")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_show_builtin_js() {
    let temp = TempDir::new().unwrap();
    let output = twc(temp.path(), &["show", "--builtin"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("/** @type {import('tailwindcss').Config} */\nmodule.exports = {"));
    assert!(text.contains("'button-orange-end': '#f97316',"));
    assert!(text.contains("xs: '2px',"));
}

#[test]
fn test_show_json() {
    let temp = TempDir::new().unwrap();
    let output = twc(temp.path(), &["show", "--builtin", "--format", "json"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["theme"]["extend"]["colors"]["primary-start"], "#667eea");
    assert_eq!(value["plugins"], serde_json::json!([]));
}

#[test]
fn test_show_discovers_config_in_parent() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("tailwind.config.toml"),
        "content = [\"./templates/**/*.html\"]\n\n[theme.extend.colors]\nbrand = \"#123456\"\n",
    )
    .unwrap();
    let nested = temp.path().join("src").join("pages");
    fs::create_dir_all(&nested).unwrap();

    let output = twc(&nested, &["show", "--format", "json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["content"][0], "./templates/**/*.html");
    assert_eq!(value["theme"]["extend"]["colors"]["brand"], "#123456");
}

#[test]
fn test_write_then_validate() {
    let temp = TempDir::new().unwrap();

    let output = twc(temp.path(), &["write", "--builtin"]);
    assert!(output.status.success());
    assert!(temp.path().join("tailwind.config.js").exists());

    // the written file is discovered and validates cleanly
    let output = twc(temp.path(), &["validate", "--strict"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout(&output).contains("tailwind.config.js"));

    // and a second write without --force leaves it alone
    let output = twc(temp.path(), &["write", "--builtin"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_write_format_names_output() {
    let temp = TempDir::new().unwrap();

    let output = twc(temp.path(), &["write", "--builtin", "--format", "toml"]);
    assert!(output.status.success());
    assert!(!temp.path().join("tailwind.config.js").exists());
    let output = twc(temp.path(), &["tokens", "--section", "backdropBlur"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "backdropBlur.xs  2px");

    // an explicit format has to agree with the output extension
    let output = twc(temp.path(), &["write", "--builtin", "-o", "tw.js", "--format", "json"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(!temp.path().join("tw.js").exists());
}

#[test]
fn test_validate_json_reports_issues() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("tailwind.config.json"),
        r##"{"content": [], "theme": {"extend": {"colors": {"bad": "#12"}}}}"##,
    )
    .unwrap();

    let output = twc(temp.path(), &["validate", "--json"]);
    assert_eq!(output.status.code(), Some(1));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["valid"], false);
    assert_eq!(value["errors"], 1);
    assert_eq!(value["warnings"], 1);
}

#[test]
fn test_tokens_section() {
    let temp = TempDir::new().unwrap();
    let output = twc(temp.path(), &["tokens", "--builtin", "--section", "backdropBlur"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "backdropBlur.xs  2px");
}

#[test]
fn test_tokens_unknown_section() {
    let temp = TempDir::new().unwrap();
    let output = twc(temp.path(), &["tokens", "--builtin", "--section", "spacing"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_invalid_arguments() {
    let temp = TempDir::new().unwrap();
    let output = twc(temp.path(), &["show", "--format", "yaml"]);
    assert_eq!(output.status.code(), Some(2));
}
