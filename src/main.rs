mod allocate;
mod input;
mod models;
mod run;
mod session;
mod ui;

use std::process::ExitCode;

fn main() -> ExitCode {
    let mut session = session::Session::default();
    match run::as_tui(&mut session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("There has been an error: {e:?}");
            ExitCode::FAILURE
        }
    }
}
