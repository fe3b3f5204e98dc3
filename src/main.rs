use std::process::ExitCode;

fn main() -> ExitCode {
    match temp_bar_chart::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => ExitCode::from(e.exit_code()),
    }
}
