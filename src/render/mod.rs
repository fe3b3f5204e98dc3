//! Text chart renderer.
//!
//! [`Renderer`] turns a validated reading sequence into chart lines. Output
//! depends only on the scale, the mode and the readings, so rendering the
//! same input twice yields the same bytes.

pub mod centered;
pub mod frame;
pub mod magnitude;
pub mod scale;

use std::io::{self, Write};

use crate::core::{config::Scale, reading::Reading};

pub use frame::{banner, summary};

/// Which bar style to draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartMode {
    /// Left-anchored bars measured from `min_temp`.
    #[default]
    Magnitude,
    /// Bars either side of a zero axis.
    Centered,
}

impl ChartMode {
    fn title(self) -> &'static str {
        match self {
            Self::Magnitude => "Temperature Bar Chart",
            Self::Centered => "Temperature Bar Chart (zero-centered)",
        }
    }
}

pub struct Renderer {
    scale: Scale,
    mode: ChartMode,
}

impl Renderer {
    #[inline]
    #[must_use]
    pub fn new(scale: Scale, mode: ChartMode) -> Self {
        Self { scale, mode }
    }
    #[inline]
    #[must_use]
    pub fn magnitude(scale: Scale) -> Self {
        Self::new(scale, ChartMode::Magnitude)
    }
    #[inline]
    #[must_use]
    pub fn centered(scale: Scale) -> Self {
        Self::new(scale, ChartMode::Centered)
    }

    /// Preamble + scale block, newline terminated.
    #[must_use]
    pub fn header(&self) -> String {
        let mut buf = String::new();
        frame::push_preamble(&mut buf, self.mode.title(), &self.scale);
        match self.mode {
            ChartMode::Magnitude => magnitude::push_header(&mut buf, &self.scale),
            ChartMode::Centered => centered::push_header(&mut buf, &self.scale),
        }
        buf
    }

    /// One chart row, without the trailing newline.
    #[must_use]
    pub fn row(&self, reading: &Reading) -> String {
        let mut buf = String::new();
        self.push_row(&mut buf, reading);
        buf
    }

    fn push_row(&self, buf: &mut String, reading: &Reading) {
        match self.mode {
            ChartMode::Magnitude => magnitude::push_row(buf, &self.scale, reading),
            ChartMode::Centered => centered::push_row(buf, &self.scale, reading),
        }
    }

    /// Header followed by one line per reading.
    #[must_use]
    pub fn render(&self, readings: &[Reading]) -> String {
        let mut buf = self.header();
        for r in readings {
            self.push_row(&mut buf, r);
            buf.push('\n');
        }
        buf
    }

    /// [`Self::render`] straight into `out`.
    pub fn render_to<W: Write>(&self, out: &mut W, readings: &[Reading]) -> io::Result<()> {
        out.write_all(self.render(readings).as_bytes())?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readings(values: &[i32]) -> Vec<Reading> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| Reading { hour: i + 1, value })
            .collect()
    }

    #[test]
    fn one_line_per_reading_after_the_header() {
        for r in [
            Renderer::magnitude(Scale::default()),
            Renderer::centered(Scale::default()),
        ] {
            let data = readings(&[50, -10, 72]);
            let header_lines = r.header().lines().count();
            let out = r.render(&data);
            let rows: Vec<_> = out.lines().skip(header_lines).collect();
            assert_eq!(rows.len(), 3);
            for (line, reading) in rows.iter().zip(&data) {
                assert_eq!(*line, r.row(reading));
            }
        }
    }

    #[test]
    fn rendering_is_idempotent() {
        let r = Renderer::centered(Scale::default());
        let data = readings(&[-30, 0, 45, 120]);
        assert_eq!(r.render(&data), r.render(&data));
    }

    #[test]
    fn render_to_writes_the_same_bytes() {
        let r = Renderer::magnitude(Scale::default());
        let data = readings(&[1, 2, 3]);
        let mut out = Vec::new();
        r.render_to(&mut out, &data).unwrap();
        assert_eq!(out, r.render(&data).into_bytes());
    }

    #[test]
    fn header_names_the_mode() {
        let m = Renderer::magnitude(Scale::default()).header();
        let c = Renderer::centered(Scale::default()).header();
        assert!(m.starts_with("Temperature Bar Chart\n"));
        assert!(c.starts_with("Temperature Bar Chart (zero-centered)\n"));
    }

    #[test]
    fn rows_are_labelled_by_hour_in_magnitude_mode() {
        let r = Renderer::magnitude(Scale::default());
        let out = r.render(&readings(&[10, 20]));
        assert!(out.contains("Hour  1 |   10°F |"));
        assert!(out.contains("Hour  2 |   20°F |"));
    }
}
