//! Show and write command implementations

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use crate::config::{merge_cli_overrides, CliOverrides, ConfigFormat, TailwindConfig};
use crate::emit::render;

use super::{
    output_target, resolve_config, GlobalArgs, Source, EXIT_ERROR, EXIT_INVALID_ARGS,
    EXIT_SUCCESS,
};

/// Resolve, validate, and extend the configuration with CLI overrides
fn prepare(
    global: &GlobalArgs,
    content: Vec<String>,
    plugins: Vec<String>,
) -> Result<(TailwindConfig, Source), ExitCode> {
    let (mut config, source) = match resolve_config(global, true) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Err(ExitCode::from(EXIT_ERROR));
        }
    };

    let overrides = CliOverrides { content, plugins };
    merge_cli_overrides(&mut config, &overrides);

    let issues = config.validate();
    if crate::config::has_errors(&issues, false) {
        for issue in &issues {
            eprintln!("{}", issue);
        }
        return Err(ExitCode::from(EXIT_INVALID_ARGS));
    }

    Ok((config, source))
}

/// Execute the show command
pub fn run_show(
    global: &GlobalArgs,
    format: ConfigFormat,
    content: Vec<String>,
    plugins: Vec<String>,
) -> ExitCode {
    let (config, source) = match prepare(global, content, plugins) {
        Ok(prepared) => prepared,
        Err(code) => return code,
    };
    tracing::debug!(%source, ?format, "rendering config");

    match render(&config, format) {
        Ok(text) => {
            print!("{}", text);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Create `path` and write `text` to it. Without `force` an existing file is
/// never replaced, even one that appears after the command started.
fn write_output(path: &Path, text: &str, force: bool) -> io::Result<()> {
    if force {
        return fs::write(path, text);
    }
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(text.as_bytes())
}

/// Execute the write command
pub fn run_write(
    global: &GlobalArgs,
    output: Option<&Path>,
    format: Option<ConfigFormat>,
    force: bool,
    content: Vec<String>,
    plugins: Vec<String>,
) -> ExitCode {
    let (output, format) = match output_target(output, format) {
        Ok(target) => target,
        Err(message) => {
            eprintln!("Error: {}", message);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let (config, source) = match prepare(global, content, plugins) {
        Ok(prepared) => prepared,
        Err(code) => return code,
    };

    let text = match render(&config, format) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("Error: Cannot create directory '{}': {}", parent.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
    }

    match write_output(&output, &text, force) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            eprintln!("Error: '{}' already exists (use --force to overwrite)", output.display());
            return ExitCode::from(EXIT_ERROR);
        }
        Err(e) => {
            eprintln!("Error: Cannot write '{}': {}", output.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
    }

    tracing::info!(%source, output = %output.display(), ?format, "wrote config");
    println!("Wrote {} ({})", output.display(), format.extension());
    ExitCode::from(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load, parse_config};
    use tempfile::TempDir;

    fn builtin_args() -> GlobalArgs {
        GlobalArgs { builtin: true, ..Default::default() }
    }

    #[test]
    fn test_write_creates_file() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("web").join("tailwind.config.js");

        let code = run_write(&builtin_args(), Some(output.as_path()), None, false, vec![], vec![]);
        assert_eq!(code, ExitCode::from(EXIT_SUCCESS));

        let text = fs::read_to_string(&output).unwrap();
        assert_eq!(parse_config(&text, ConfigFormat::Js).unwrap(), load());
    }

    #[test]
    fn test_write_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("tailwind.config.js");
        fs::write(&output, "keep me").unwrap();

        let code = run_write(&builtin_args(), Some(output.as_path()), None, false, vec![], vec![]);
        assert_eq!(code, ExitCode::from(EXIT_ERROR));
        assert_eq!(fs::read_to_string(&output).unwrap(), "keep me");

        let code = run_write(&builtin_args(), Some(output.as_path()), None, true, vec![], vec![]);
        assert_eq!(code, ExitCode::from(EXIT_SUCCESS));
        assert_ne!(fs::read_to_string(&output).unwrap(), "keep me");
    }

    #[test]
    fn test_write_toml_with_overrides() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("tailwind.config.toml");

        let code = run_write(
            &builtin_args(),
            Some(output.as_path()),
            None,
            false,
            vec!["./public/**/*.html".to_string()],
            vec!["@tailwindcss/forms".to_string()],
        );
        assert_eq!(code, ExitCode::from(EXIT_SUCCESS));

        let config = parse_config(&fs::read_to_string(&output).unwrap(), ConfigFormat::Toml).unwrap();
        assert_eq!(config.content.len(), 3);
        assert_eq!(config.plugins, vec!["@tailwindcss/forms"]);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("tailwind.config.js");

        let code =
            run_write(&builtin_args(), Some(output.as_path()), None, false, vec!["[bad".to_string()], vec![]);
        assert_eq!(code, ExitCode::from(EXIT_INVALID_ARGS));
        assert!(!output.exists());
    }

    #[test]
    fn test_write_format_mismatch_rejected() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("tailwind.config.js");

        let code =
            run_write(&builtin_args(), Some(output.as_path()), Some(ConfigFormat::Toml), false, vec![], vec![]);
        assert_eq!(code, ExitCode::from(EXIT_INVALID_ARGS));
        assert!(!output.exists());

        let unknown = temp.path().join("tailwind.config");
        let code = run_write(&builtin_args(), Some(unknown.as_path()), None, false, vec![], vec![]);
        assert_eq!(code, ExitCode::from(EXIT_INVALID_ARGS));
        assert!(!unknown.exists());
    }

    #[test]
    fn test_write_output_never_replaces_without_force() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("tailwind.config.json");

        write_output(&output, "first", false).unwrap();
        let err = write_output(&output, "second", false).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(&output).unwrap(), "first");

        write_output(&output, "third", true).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "third");
    }
}
