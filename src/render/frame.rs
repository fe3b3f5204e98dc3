//! Chrome around the chart: banner, preamble, rules and the summary footer.

use std::fmt::Write;

use crate::core::{
    config::Scale,
    constants::{BAR_GLYPH, DEGREE_SUFFIX, RULE_WIDTH},
};

const TITLE: &str = "HOURLY TEMPERATURE BAR CHART";

/// One full-width rule of `ch` plus newline.
#[inline]
pub(crate) fn push_rule(buf: &mut String, ch: char) {
    buf.extend(std::iter::repeat_n(ch, RULE_WIDTH));
    buf.push('\n');
}

/// Program banner, printed before anything is read.
#[must_use]
pub fn banner() -> String {
    let mut buf = String::new();
    push_rule(&mut buf, '=');
    let pad = (RULE_WIDTH - TITLE.len()) / 2;
    let _ = writeln!(buf, "{:pad$}{TITLE}", "");
    push_rule(&mut buf, '=');
    buf.push('\n');
    buf
}

/// Title, scale and range lines shown above either chart mode.
pub(crate) fn push_preamble(buf: &mut String, title: &str, scale: &Scale) {
    let _ = writeln!(buf, "{title}");
    let _ = writeln!(
        buf,
        "Scale: Each {BAR_GLYPH} represents {} degrees Fahrenheit",
        scale.degrees_per_star()
    );
    let _ = writeln!(
        buf,
        "Range: {}{DEGREE_SUFFIX} to {}{DEGREE_SUFFIX}",
        scale.min_temp(),
        scale.max_temp()
    );
}

/// Footer with the number of rows drawn.
#[must_use]
pub fn summary(rows: usize) -> String {
    let mut buf = String::from("\n");
    push_rule(&mut buf, '=');
    let _ = writeln!(buf, "Total hours recorded: {rows}");
    push_rule(&mut buf, '=');
    buf
}
