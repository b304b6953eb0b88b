//! projkit - project status, build and deploy

use std::process::ExitCode;

fn main() -> ExitCode {
    match project_kit::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
