//! Mode B: bars grow left (below zero) or right (above zero) from a fixed
//! zero axis.
//!
//! ```text
//!       ||  -30  -15    0   15   30   45   60   75   90  105  120
//! -------------------------------------------------
//! -10°F |       ***|
//!   0°F |          |
//!  72°F |          |************************
//! ```

use std::fmt::Write;

use crate::{
    core::{
        config::Scale,
        constants::{BAR_GLYPH, CENTERED_TICK_DEGREES, DEGREE_SUFFIX, SEPARATOR},
        reading::Reading,
    },
    render::frame::push_rule,
};

/// Display columns taken by `"{:>4}°F |"` in front of every bar.
const ROW_PREFIX_COLS: usize = 8;

/// Tick labels are right-aligned in fields as wide as the gap between ticks.
fn tick_field(scale: &Scale) -> usize {
    (CENTERED_TICK_DEGREES / scale.degrees_per_star()).max(1).unsigned_abs() as usize
}

#[inline]
fn push_glyphs(buf: &mut String, glyph: char, n: usize) {
    buf.extend(std::iter::repeat_n(glyph, n));
}

pub(crate) fn push_header(buf: &mut String, scale: &Scale) {
    let field = tick_field(scale);

    // `||` sits on the same column as the rows' left edge
    push_rule(buf, '-');
    push_glyphs(buf, ' ', ROW_PREFIX_COLS - 2);
    push_glyphs(buf, SEPARATOR, 2);
    for temp in (scale.min_temp()..=scale.max_temp()).step_by(CENTERED_TICK_DEGREES as usize) {
        let _ = write!(buf, "{temp:>field$}");
    }
    buf.push('\n');
    push_rule(buf, '-');
}

pub(crate) fn push_row(buf: &mut String, scale: &Scale, reading: &Reading) {
    let value = reading.value;
    let zero = scale.zero_position();
    let stars = scale.stars_from_zero(value);

    let _ = write!(buf, "{value:>4}{DEGREE_SUFFIX} {SEPARATOR}");
    match value.signum() {
        -1 => {
            push_glyphs(buf, ' ', zero.saturating_sub(stars));
            push_glyphs(buf, BAR_GLYPH, stars);
            buf.push(SEPARATOR);
        }
        0 => {
            push_glyphs(buf, ' ', zero);
            buf.push(SEPARATOR);
        }
        _ => {
            push_glyphs(buf, ' ', zero);
            buf.push(SEPARATOR);
            push_glyphs(buf, BAR_GLYPH, stars);
        }
    }
}
