//! Display refresh loop
//!
//! Redraws the LED grid once per tick from the current wall-clock time and
//! presentation state, and toggles the status LED as a heartbeat.

use embassy_time::{Duration, Instant, Ticker};
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::peripherals::GPIO2;
use esp_println::println;

use binclock_core::render::render;

use crate::config;
use crate::infrastructure::drivers::SharedDisplay;
use crate::infrastructure::services::{ClockStateService, WallClockService};

#[embassy_executor::task]
pub async fn render_loop_task(display: &'static SharedDisplay, status_gpio: GPIO2<'static>) {
    let mut heartbeat = Output::new(status_gpio, Level::Low, OutputConfig::default());
    let state = ClockStateService;
    let clock = WallClockService;
    let mut ticker = Ticker::every(Duration::from_secs(config::DISPLAY.tick_period_secs));
    loop {
        let snapshot = state.snapshot();
        let frame = render(
            clock.now(),
            snapshot.mode,
            snapshot.brightness,
            Instant::now().as_millis(),
            &config::DISPLAY.palette,
        );
        if let Err(e) = display.lock().await.show(&frame) {
            println!("render: led write failed: {e:?}");
        }
        heartbeat.toggle();
        ticker.next().await;
    }
}
