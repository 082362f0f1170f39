//! Frame rendering for the 5x5 grid.
//!
//! Rendering is a pure function of its inputs; the same time, state and
//! elapsed milliseconds always produce the same frame.

use smart_leds::RGB8;

use crate::color::{hsv_to_rgb, scale_color};
use crate::palette::Palette;
use crate::state::ClockMode;
use crate::time::TimeSample;

pub const GRID_WIDTH: usize = 5;
pub const GRID_HEIGHT: usize = 5;
pub const PIXEL_COUNT: usize = GRID_WIDTH * GRID_HEIGHT;

/// One finished frame, index `i` maps to grid cell `(i % 5, i / 5)`.
pub type PixelBuffer = [RGB8; PIXEL_COUNT];

/// Each binary field reserves two full rows of five cells.
const FIELD_BITS: u16 = 10;

/// Top row of the hours field.
const HOURS_ROW: usize = 0;
/// Top row of the minutes field.
const MINUTES_ROW: usize = 2;
/// Center cell of the bottom row, lit on even seconds.
const SECONDS_X: usize = 2;
const SECONDS_Y: usize = 4;

pub const fn pixel_index(x: usize, y: usize) -> usize {
    y * GRID_WIDTH + x
}

/// Render one frame for the given time and presentation state.
///
/// `elapsed_ms` only drives the rainbow animation; binary frames do not
/// depend on it.
pub fn render(
    time: TimeSample,
    mode: ClockMode,
    brightness: u8,
    elapsed_ms: u64,
    palette: &Palette,
) -> PixelBuffer {
    match mode {
        ClockMode::Binary => render_binary(time, brightness, palette),
        ClockMode::Rainbow => render_rainbow(brightness, elapsed_ms, palette),
    }
}

/// Binary layout: hours across rows 0-1, minutes across rows 2-3, the
/// seconds indicator in the bottom row center.
fn render_binary(time: TimeSample, brightness: u8, palette: &Palette) -> PixelBuffer {
    let mut frame = [palette.off; PIXEL_COUNT];
    let lit = scale_color(palette.on, brightness);

    fill_binary_field(&mut frame, u16::from(time.hour), HOURS_ROW, lit);
    fill_binary_field(&mut frame, u16::from(time.minute), MINUTES_ROW, lit);

    if time.second % 2 == 0 {
        frame[pixel_index(SECONDS_X, SECONDS_Y)] = palette.accent;
    }

    frame
}

/// Light field cell `k` when bit `k` of `value` is set, walking the two
/// rows left-to-right with the least-significant bit first. The field is a
/// fixed ten bits wide even though hours and minutes need fewer; bits past
/// the field are simply not drawn.
fn fill_binary_field(frame: &mut PixelBuffer, value: u16, start_row: usize, lit: RGB8) {
    for bit in 0..FIELD_BITS {
        if value >> bit & 1 == 1 {
            let cell = bit as usize;
            let x = cell % GRID_WIDTH;
            let y = start_row + cell / GRID_WIDTH;
            frame[pixel_index(x, y)] = lit;
        }
    }
}

/// Rainbow sweep driven purely by elapsed wall-clock milliseconds.
#[allow(clippy::cast_possible_truncation)]
fn render_rainbow(brightness: u8, elapsed_ms: u64, palette: &Palette) -> PixelBuffer {
    let mut frame = [palette.off; PIXEL_COUNT];
    let phase = elapsed_ms / 50;

    for (i, pixel) in frame.iter_mut().enumerate() {
        let hue = ((i as u64 * 360 / PIXEL_COUNT as u64 + phase) % 360) as u16;
        *pixel = hsv_to_rgb(hue, 100, brightness);
    }

    frame
}
