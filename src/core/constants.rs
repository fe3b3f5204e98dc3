//! A collection of constants.

/// Coldest temperature accepted by the reader, in °F.
pub const MIN_TEMP: i32 = -30;
/// Hottest temperature accepted by the reader, in °F.
pub const MAX_TEMP: i32 = 120;

/// Each bar glyph stands for this many degrees.
pub const DEGREES_PER_STAR: i32 = 3;
/// Magnitude bars never grow past this many glyphs.
pub const MAX_STARS: i32 = 50;

/// Magnitude header places a tick every 10 stars
pub const MAGNITUDE_TICK_STARS: i32 = 10;
/// Centered header places a tick every 15 degrees
pub const CENTERED_TICK_DEGREES: i32 = 15;

/// Glyph repeated to draw a bar
pub const BAR_GLYPH: char = '*';
/// Vertical separator and zero axis
pub const SEPARATOR: char = '|';
/// Unit suffix printed after every value
pub const DEGREE_SUFFIX: &str = "°F";

/// Width of the dashed header rules and the `=` banner rules.
pub const RULE_WIDTH: usize = 49;
