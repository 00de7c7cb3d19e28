use std::process::ExitCode;

use aiterm::cli::{self, ExitError};
use aiterm::ui::output;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<ExitError>() {
            // Already reported by the handler.
            Some(exit) => ExitCode::from(exit.code),
            None => {
                output::error(format!("{:#}", err));
                ExitCode::FAILURE
            }
        },
    }
}
