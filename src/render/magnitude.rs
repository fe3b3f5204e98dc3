//! Mode A: left-anchored bars, one glyph per `degrees_per_star` above
//! `min_temp`.
//!
//! ```text
//!         ||         |         |         |         |         |
//!         |-30         0        30        60        90       120
//! -------------------------------------------------
//! Hour  1 |   50°F |***************************
//! ```

use std::fmt::Write;

use crate::{
    core::{
        config::Scale,
        constants::{BAR_GLYPH, DEGREE_SUFFIX, MAGNITUDE_TICK_STARS, SEPARATOR},
        reading::Reading,
    },
    render::frame::push_rule,
};

/// Blank gutter in front of the scale, as wide as `"Hour NN "`.
const GUTTER: &str = "        ";
/// Columns between two consecutive ticks.
const TICK_FIELD: usize = MAGNITUDE_TICK_STARS as usize;

fn ticks(scale: &Scale) -> impl Iterator<Item = i32> {
    (0..=scale.max_stars()).step_by(TICK_FIELD)
}

pub(crate) fn push_header(buf: &mut String, scale: &Scale) {
    push_rule(buf, '-');

    // tick marks
    buf.push_str(GUTTER);
    buf.push(SEPARATOR);
    for tick in ticks(scale) {
        if tick == 0 {
            buf.push(SEPARATOR);
        } else {
            let _ = write!(buf, "{SEPARATOR:>TICK_FIELD$}");
        }
    }
    buf.push('\n');

    // temperature under each tick
    buf.push_str(GUTTER);
    buf.push(SEPARATOR);
    for tick in ticks(scale) {
        let temp = scale.min_temp() + tick * scale.degrees_per_star();
        if tick == 0 {
            let _ = write!(buf, "{temp}");
        } else {
            let _ = write!(buf, "{temp:>TICK_FIELD$}");
        }
    }
    buf.push('\n');

    push_rule(buf, '-');
}

pub(crate) fn push_row(buf: &mut String, scale: &Scale, reading: &Reading) {
    let _ = write!(
        buf,
        "Hour {:>2} {SEPARATOR} {:>4}{DEGREE_SUFFIX} {SEPARATOR}",
        reading.hour, reading.value
    );
    buf.extend(std::iter::repeat_n(BAR_GLYPH, scale.stars(reading.value)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(hour: usize, value: i32) -> String {
        let mut buf = String::new();
        push_row(&mut buf, &Scale::default(), &Reading { hour, value });
        buf
    }

    #[test]
    fn header_matches_the_scale() {
        let mut buf = String::new();
        push_header(&mut buf, &Scale::default());
        let rule = "-".repeat(49);
        let expected = format!(
            "{rule}\n\
             \x20       ||         |         |         |         |         |\n\
             \x20       |-30         0        30        60        90       120\n\
             {rule}\n"
        );
        assert_eq!(buf, expected);
    }

    #[test]
    fn row_layout() {
        assert_eq!(row(1, 50), format!("Hour  1 |   50°F |{}", "*".repeat(27)));
        assert_eq!(row(12, -10), format!("Hour 12 |  -10°F |{}", "*".repeat(7)));
    }

    #[test]
    fn min_temp_has_an_empty_bar() {
        assert_eq!(row(3, -30), "Hour  3 |  -30°F |");
    }

    #[test]
    fn max_temp_is_capped() {
        assert_eq!(row(4, 120), format!("Hour  4 |  120°F |{}", "*".repeat(50)));
    }
}
