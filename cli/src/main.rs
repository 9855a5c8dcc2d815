mod app;
mod error;
mod prompt;
mod state;

use app::App;
use prompt::Prompter;

use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = App::new(Prompter::new(stdin.lock(), stdout.lock()));

    match app.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
