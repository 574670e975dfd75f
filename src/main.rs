//! twc - inspect, validate and write the utility-CSS build configuration

use std::process::ExitCode;

use twconfig::cli;

fn main() -> ExitCode {
    cli::run()
}
