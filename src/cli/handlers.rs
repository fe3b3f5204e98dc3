use std::{
    io::{BufRead, Write},
    time::Instant,
};

use crate::{
    core::{
        config::Scale,
        error::ChartError,
        reader::read_temperatures_from_source,
        reading::ReadReport,
    },
    render::{Renderer, banner, summary},
};

use super::parse::Cli;

const PROMPT: &str = "Enter the name of the temperature data file: ";

/// Banner → file name → read → warnings → chart → summary.
///
/// Chart text goes to `out`, diagnostics to `err`. Fatal conditions are
/// returned untouched; [`report_error`] formats them.
pub fn chart<I, O, E>(a: &Cli, input: &mut I, out: &mut O, err: &mut E) -> Result<(), ChartError>
where
    I: BufRead,
    O: Write,
    E: Write,
{
    out.write_all(banner().as_bytes())?;
    let path = match &a.file {
        Some(p) => p.clone(),
        None => prompt(input, out)?,
    };

    let scale = Scale::default();
    let t_ingest = Instant::now();
    let report = read_temperatures_from_source(&path, &mut *input, &scale)?;
    let dur_ingest = t_ingest.elapsed().as_micros();

    warn_rejected(err, &report, &scale)?;
    if report.is_empty() {
        return Err(ChartError::EmptyResult);
    }

    let t_render = Instant::now();
    let renderer = Renderer::new(scale, a.mode.into());
    out.write_all(b"\n")?;
    renderer.render_to(out, &report.readings)?;
    out.write_all(summary(report.readings.len()).as_bytes())?;
    out.flush()?;
    let dur_render = t_render.elapsed().as_micros();

    if a.debug {
        writeln!(
            err,
            "ingest: {dur_ingest} µs   ({} tokens, {} rejected)   render: {dur_render} µs",
            report.tokens,
            report.rejected.len()
        )?;
        if let Some(h) = &report.halted {
            writeln!(err, "read stopped at '{}' on line {}", h.token, h.line)?;
        }
    }
    Ok(())
}

fn prompt<I: BufRead, O: Write>(input: &mut I, out: &mut O) -> Result<String, ChartError> {
    out.write_all(PROMPT.as_bytes())?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

fn warn_rejected<E: Write>(err: &mut E, report: &ReadReport, scale: &Scale) -> std::io::Result<()> {
    for r in &report.rejected {
        writeln!(
            err,
            "Warning: Invalid temperature {} at reading {} (line {}) (ignored)",
            r.value, r.ordinal, r.line
        )?;
        writeln!(
            err,
            "         Valid range is {} to {} degrees.",
            scale.min_temp(),
            scale.max_temp()
        )?;
    }
    Ok(())
}

/// Print a fatal error on the diagnostic stream.
pub fn report_error<E: Write>(err: &mut E, e: &ChartError) {
    let _ = match e {
        ChartError::SourceUnavailable { .. } => writeln!(
            err,
            "Error: {e}\n\
             Error: Unable to process temperature data.\n\
             Please check that the file exists and contains valid data."
        ),
        _ => writeln!(err, "Error: {e}"),
    };
}
