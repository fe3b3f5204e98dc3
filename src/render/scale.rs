//! Value → bar geometry.
//!
//! Magnitude bars round half-up and clamp to `max_stars`. Centered bars use
//! floor division so a negative bar never reaches past the zero axis. For
//! any value `>= min_temp`, `stars_from_zero(value) <= zero_position()`.
//! Positive centered bars are *not* capped: with the default
//! `-30..=120` range a 120°F row is 40 glyphs, four times the left half.

use crate::core::config::Scale;

#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
impl Scale {
    /// Magnitude bar length: `round((value - min) / step)`, clamped to
    /// `0..=max_stars`.
    #[must_use]
    pub fn stars(&self, value: i32) -> usize {
        let step = i64::from(self.degrees_per_star());
        let adjusted = i64::from(value) - i64::from(self.min_temp());
        let stars = (adjusted + step / 2) / step;
        stars.clamp(0, i64::from(self.max_stars())) as usize
    }

    /// Centered bar length: `floor(|value| / step)`.
    #[must_use]
    pub fn stars_from_zero(&self, value: i32) -> usize {
        (value.unsigned_abs() / self.degrees_per_star().unsigned_abs()) as usize
    }

    /// Column of the zero axis, counted from the left edge of the bar area.
    #[must_use]
    pub fn zero_position(&self) -> usize {
        self.stars_from_zero(self.min_temp())
    }
}
