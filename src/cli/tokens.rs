//! Tokens command implementation

use std::process::ExitCode;

use crate::config::{TailwindConfig, Token};

use super::{resolve_config, GlobalArgs, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Tokens to list, optionally restricted to one section
fn select<'a>(config: &'a TailwindConfig, section: Option<&str>) -> Option<Vec<Token<'a>>> {
    match section {
        Some(name) => {
            config.section(name)?;
            Some(config.tokens().filter(|t| t.section == name).collect())
        }
        None => Some(config.tokens().collect()),
    }
}

/// Plain text listing, names padded to a common width
fn format_tokens(tokens: &[Token<'_>]) -> String {
    let width = tokens.iter().map(|t| t.section.len() + 1 + t.name.len()).max().unwrap_or(0);

    let mut out = String::new();
    for token in tokens {
        let key = format!("{}.{}", token.section, token.name);
        out.push_str(&format!("{:<width$}  {}\n", key, token.value, width = width));
    }
    out
}

/// Execute the tokens command
pub fn run_tokens(global: &GlobalArgs, section: Option<&str>, json: bool) -> ExitCode {
    let (config, _) = match resolve_config(global, true) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let Some(tokens) = select(&config, section) else {
        let known: Vec<&str> = config.sections().map(|(name, _)| name).collect();
        eprintln!(
            "Error: Unknown section '{}'. Available: {}",
            section.unwrap_or_default(),
            known.join(", ")
        );
        return ExitCode::from(EXIT_INVALID_ARGS);
    };

    if json {
        match serde_json::to_string_pretty(&tokens) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        print!("{}", format_tokens(&tokens));
    }

    ExitCode::from(EXIT_SUCCESS)
}
