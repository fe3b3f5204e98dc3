//! Run-time scale configuration + fluent builder.

use std::ops::RangeInclusive;

use crate::core::{
    constants::{DEGREES_PER_STAR, MAX_STARS, MAX_TEMP, MIN_TEMP},
    error::ConfigError,
};

/// Immutable parameters shared by the reader and the renderer.
///
/// Fields are private so every `Scale` has passed [`ScaleBuilder::build`]:
/// `min_temp < max_temp`, `degrees_per_star > 0` and `max_stars > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    min_temp: i32,
    max_temp: i32,
    degrees_per_star: i32,
    max_stars: i32,
}

impl Default for Scale {
    fn default() -> Self {
        Self {
            min_temp: MIN_TEMP,
            max_temp: MAX_TEMP,
            degrees_per_star: DEGREES_PER_STAR,
            max_stars: MAX_STARS,
        }
    }
}

impl Scale {
    #[inline]
    #[must_use]
    pub fn builder() -> ScaleBuilder {
        ScaleBuilder::new()
    }

    #[inline]
    #[must_use]
    pub const fn min_temp(&self) -> i32 {
        self.min_temp
    }
    #[inline]
    #[must_use]
    pub const fn max_temp(&self) -> i32 {
        self.max_temp
    }
    #[inline]
    #[must_use]
    pub const fn degrees_per_star(&self) -> i32 {
        self.degrees_per_star
    }
    #[inline]
    #[must_use]
    pub const fn max_stars(&self) -> i32 {
        self.max_stars
    }

    /// `true` when `value` lies inside the accepted range (both ends inclusive).
    #[inline]
    #[must_use]
    pub const fn contains(&self, value: i32) -> bool {
        value >= self.min_temp && value <= self.max_temp
    }
}

/// Fluent builder; unset fields fall back to the compile-time constants.
#[derive(Debug, Default)]
pub struct ScaleBuilder {
    min_temp: Option<i32>,
    max_temp: Option<i32>,
    degrees_per_star: Option<i32>,
    max_stars: Option<i32>,
}

impl ScaleBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn min_temp(mut self, v: i32) -> Self {
        self.min_temp = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn max_temp(mut self, v: i32) -> Self {
        self.max_temp = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn range(mut self, r: RangeInclusive<i32>) -> Self {
        self.min_temp = Some(*r.start());
        self.max_temp = Some(*r.end());
        self
    }
    #[inline]
    #[must_use]
    pub fn degrees_per_star(mut self, v: i32) -> Self {
        self.degrees_per_star = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn max_stars(mut self, v: i32) -> Self {
        self.max_stars = Some(v);
        self
    }

    pub fn build(self) -> Result<Scale, ConfigError> {
        let min_temp = self.min_temp.unwrap_or(MIN_TEMP);
        let max_temp = self.max_temp.unwrap_or(MAX_TEMP);
        if min_temp >= max_temp {
            return Err(ConfigError::InvalidRange {
                low: min_temp,
                high: max_temp,
            });
        }
        let degrees_per_star = self.degrees_per_star.unwrap_or(DEGREES_PER_STAR);
        if degrees_per_star <= 0 {
            return Err(ConfigError::NonPositive("degrees_per_star"));
        }
        let max_stars = self.max_stars.unwrap_or(MAX_STARS);
        if max_stars <= 0 {
            return Err(ConfigError::NonPositive("max_stars"));
        }
        Ok(Scale {
            min_temp,
            max_temp,
            degrees_per_star,
            max_stars,
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ScaleBuilder> for Result<Scale, ConfigError> {
    fn from(b: ScaleBuilder) -> Self {
        b.build()
    }
}
impl From<Scale> for Result<Scale, ConfigError> {
    fn from(s: Scale) -> Self {
        Ok(s)
    }
}
