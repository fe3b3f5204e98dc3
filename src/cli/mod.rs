mod handlers;
pub mod parse;

use std::io::{stderr, stdin, stdout};

use clap::Parser;
pub use handlers::report_error;
pub use parse::Cli;

use crate::core::error::ChartError;

/// Parse arguments and draw the chart. Fatal errors are already printed on
/// stderr when this returns `Err`.
pub fn run() -> Result<(), ChartError> {
    let cli = parse::Cli::parse();
    let res = handlers::chart(
        &cli,
        &mut stdin().lock(),
        &mut stdout().lock(),
        &mut stderr().lock(),
    );
    if let Err(e) = &res {
        report_error(&mut stderr().lock(), e);
    }
    res
}
