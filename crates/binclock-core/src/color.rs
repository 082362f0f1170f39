//! Color math for the rainbow mode and brightness scaling.

use smart_leds::RGB8;

/// Scale one channel by a percentage brightness, truncating.
pub fn scale_channel(channel: u8, brightness: u8) -> u8 {
    #[allow(clippy::cast_possible_truncation)]
    {
        (u16::from(channel) * u16::from(brightness) / 100) as u8
    }
}

/// Scale a whole color by a percentage brightness.
pub fn scale_color(color: RGB8, brightness: u8) -> RGB8 {
    RGB8::new(
        scale_channel(color.r, brightness),
        scale_channel(color.g, brightness),
        scale_channel(color.b, brightness),
    )
}

/// Convert HSV to RGB using the six-sextant piecewise-linear conversion.
///
/// `hue` is in degrees, `sat` and `val` are percentages. Channel values are
/// truncated, not rounded.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::many_single_char_names
)]
pub fn hsv_to_rgb(hue: u16, sat: u8, val: u8) -> RGB8 {
    let h = f32::from(hue % 360) / 360.0;
    let s = f32::from(sat) / 100.0;
    let v = f32::from(val) / 100.0;

    let sextant = (h * 6.0) as u8;
    let f = h * 6.0 - f32::from(sextant);
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sextant % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    RGB8::new((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}
