//! Fixed named-color table used by the display.

use smart_leds::RGB8;

/// Named colors, fixed at configuration time and read-only while running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Unlit cell
    pub off: RGB8,
    /// Lit binary digit
    pub on: RGB8,
    /// Dimmed variant of `on`
    pub dim: RGB8,
    /// Seconds indicator
    pub accent: RGB8,
    pub error: RGB8,
    pub warning: RGB8,
}

/// The clock's stock palette: deep pink digits with a green seconds accent.
pub const DEEP_PINK: Palette = Palette {
    off: RGB8::new(0, 0, 0),
    on: RGB8::new(255, 20, 147),
    dim: RGB8::new(50, 5, 30),
    accent: RGB8::new(0, 255, 25),
    error: RGB8::new(255, 0, 0),
    warning: RGB8::new(255, 255, 0),
};

impl Default for Palette {
    fn default() -> Self {
        DEEP_PINK
    }
}
