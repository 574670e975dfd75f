//! Validate command implementation

use std::process::ExitCode;

use crate::config::{has_errors, Severity};

use super::{resolve_config, GlobalArgs, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the validate command
pub fn run_validate(global: &GlobalArgs, strict: bool, json: bool) -> ExitCode {
    // parse only, the issues are reported below rather than failing the load
    let (config, source) = match resolve_config(global, false) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let issues = config.validate();
    let error_count = issues.iter().filter(|i| i.severity == Severity::Error).count();
    let warning_count = issues.len() - error_count;
    let failed = has_errors(&issues, strict);

    if json {
        let output = serde_json::json!({
            "source": source.to_string(),
            "valid": !failed,
            "errors": error_count,
            "warnings": warning_count,
            "issues": issues,
        });
        match serde_json::to_string_pretty(&output) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        println!("Validating {}...", source);
        for issue in &issues {
            println!("  {}", issue);
        }
        if issues.is_empty() {
            println!("OK: {} content paths, {} tokens", config.content.len(), config.tokens().count());
        } else {
            println!("{} error(s), {} warning(s)", error_count, warning_count);
        }
    }

    if failed {
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn file_args(temp: &TempDir, name: &str, contents: &str) -> GlobalArgs {
        let path = temp.path().join(name);
        fs::write(&path, contents).unwrap();
        GlobalArgs { config: Some(path), ..Default::default() }
    }

    #[test]
    fn test_validate_builtin_passes() {
        let global = GlobalArgs { builtin: true, ..Default::default() };
        assert_eq!(run_validate(&global, true, false), ExitCode::from(EXIT_SUCCESS));
        assert_eq!(run_validate(&global, true, true), ExitCode::from(EXIT_SUCCESS));
    }

    #[test]
    fn test_validate_reports_errors() {
        let temp = TempDir::new().unwrap();
        let global = file_args(
            &temp,
            "tailwind.config.json5",
            "{ content: ['./src/**/*.rs'], theme: { extend: { colors: { x: 'nope' } } } }",
        );
        assert_eq!(run_validate(&global, false, false), ExitCode::from(EXIT_ERROR));
    }

    #[test]
    fn test_validate_strict_fails_on_warnings() {
        let temp = TempDir::new().unwrap();
        let global = file_args(&temp, "tailwind.config.toml", "content = []\n");
        assert_eq!(run_validate(&global, false, false), ExitCode::from(EXIT_SUCCESS));
        assert_eq!(run_validate(&global, true, false), ExitCode::from(EXIT_ERROR));
    }

    #[test]
    fn test_validate_unreadable_file() {
        let temp = TempDir::new().unwrap();
        let global =
            GlobalArgs { config: Some(temp.path().join("missing.js")), ..Default::default() };
        assert_eq!(run_validate(&global, false, false), ExitCode::from(EXIT_ERROR));
    }
}
