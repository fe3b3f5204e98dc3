//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    config::{Scale, ScaleBuilder},
    constants::{DEGREES_PER_STAR, MAX_STARS, MAX_TEMP, MIN_TEMP},
    error::{ChartError, ConfigError},
    reader::{
        read_temperatures, read_temperatures_from_path, read_temperatures_from_source,
    },
    reading::{Halt, ReadReport, Reading, Rejected},
};

pub use render::{ChartMode, Renderer, banner, summary};

/// Read `path` and draw it with the default scale. Returns the read report
/// (for diagnostics) and the chart text including the summary footer.
pub fn chart_file(path: &str, mode: ChartMode) -> Result<(ReadReport, String), ChartError> {
    chart_file_with(path, Scale::default(), mode)
}

/// [`chart_file`] with a custom scale; accepts a [`Scale`] or an unbuilt
/// [`ScaleBuilder`].
pub fn chart_file_with<S>(
    path: &str,
    scale: S,
    mode: ChartMode,
) -> Result<(ReadReport, String), ChartError>
where
    S: Into<Result<Scale, ConfigError>>,
{
    let scale = scale.into()?;
    let report = read_temperatures_from_path(path, &scale)?;
    if report.is_empty() {
        return Err(ChartError::EmptyResult);
    }
    let mut text = Renderer::new(scale, mode).render(&report.readings);
    text.push_str(&summary(report.readings.len()));
    Ok((report, text))
}
