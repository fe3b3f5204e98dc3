use clap::{Parser, ValueEnum};

use crate::render::ChartMode;

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "temp-bar-chart",
    about = "Hourly temperature readings as a text bar chart"
)]
pub struct Cli {
    /// Temperature file (use `-` for stdin; prompts when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<String>,

    /// Bar style
    #[arg(short, long, value_enum, default_value_t = ModeArg::Magnitude)]
    pub mode: ModeArg,

    /// Emit timing diagnostics
    #[arg(long)]
    pub debug: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Bars grow from the coldest temperature
    Magnitude,
    /// Bars grow left or right of 0°F
    Centered,
}

impl From<ModeArg> for ChartMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Magnitude => ChartMode::Magnitude,
            ModeArg::Centered => ChartMode::Centered,
        }
    }
}
