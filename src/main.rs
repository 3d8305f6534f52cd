//! sprintdoc - Split sprint planning documents into per-item files

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = sprintdoc::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
