use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use static_cell::make_static;

use esp_hal::xtensa_lx::interrupt;
use esp_hal::{gpio::interconnect::PeripheralOutput, peripherals::RMT, rmt::Rmt, time::Rate};
use esp_hal_smartled::{LedAdapterError, SmartLedsAdapter, buffer_size, smart_led_buffer};
use smart_leds::SmartLedsWrite;

use binclock_core::render::{PIXEL_COUNT, PixelBuffer};

use crate::config;

/// The display is shared between the render loop and the clear command;
/// the mutex keeps a clear from landing in the middle of a frame write.
pub type SharedDisplay = Mutex<CriticalSectionRawMutex, LedGridDriver>;

/// Driver for the 5x5 WS2812 grid using the RMT peripheral
///
/// The RMT (Remote Control) peripheral generates the precise timing
/// signals required by WS2812B LEDs.
pub struct LedGridDriver {
    adapter: SmartLedsAdapter<'static, { buffer_size(PIXEL_COUNT) }>,
}

impl LedGridDriver {
    /// Create a new grid driver
    ///
    /// # Arguments
    /// * `rmt` - RMT peripheral
    /// * `pin` - GPIO pin connected to the LED data line
    pub fn new<O>(rmt: RMT<'static>, pin: O) -> Self
    where
        O: PeripheralOutput<'static>,
    {
        let rmt = Rmt::new(rmt, Rate::from_mhz(80)).unwrap();

        // Safety: make_static! gives the RMT buffer a 'static lifetime
        let rmt_buffer = make_static!(smart_led_buffer!(PIXEL_COUNT));
        let adapter = SmartLedsAdapter::new(rmt.channel0, pin, rmt_buffer);

        Self { adapter }
    }

    /// Transmit a finished frame to the strip.
    pub fn show(&mut self, frame: &PixelBuffer) -> Result<(), LedAdapterError> {
        interrupt::free(|| self.adapter.write(frame.iter().copied()))
    }

    /// Blank every cell.
    pub fn clear(&mut self) -> Result<(), LedAdapterError> {
        let dark = [config::DISPLAY.palette.off; PIXEL_COUNT];
        self.show(&dark)
    }
}
