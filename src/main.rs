use casework::cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse the command line and run the selected command
    match cli::run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
