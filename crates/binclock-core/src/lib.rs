#![no_std]

pub mod color;
pub mod command;
pub mod palette;
pub mod render;
pub mod state;
pub mod time;

pub use color::hsv_to_rgb;
pub use command::Command;
pub use palette::Palette;
pub use render::{GRID_HEIGHT, GRID_WIDTH, PIXEL_COUNT, PixelBuffer, render};
pub use state::{ClockMode, ClockState};
pub use time::TimeSample;

pub use smart_leds::RGB8;
