//! twconfig - typed utility-CSS build configuration
//!
//! This library provides functionality to:
//! - Build the project's built-in configuration (content globs, color and
//!   backdrop blur tokens, plugins)
//! - Load `tailwind.config.{js,json,json5,toml}` files
//! - Validate token values (CSS colors, CSS lengths, glob patterns)
//! - Write the configuration back out in any of those formats

pub mod cli;
pub mod color;
pub mod config;
pub mod emit;
pub mod length;
pub mod logging;
