#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_sync::mutex::Mutex;
use embassy_time::{Duration, Timer, with_timeout};
use esp_println::println;

use esp_alloc as _;
use esp_backtrace as _;
use esp_hal::{clock::CpuClock, timer::timg::TimerGroup};

use binclock::controllers::ClockHttpController;
use binclock::infrastructure::drivers::{
    LedGridDriver, SharedDisplay, init_network_stack, wait_for_connection,
};
use binclock::infrastructure::tasks::{
    http_server_task, network_runner_task, render_loop_task, time_sync_task, wifi_connection_task,
};
use binclock::mk_static;

esp_bootloader_esp_idf::esp_app_desc!();

/// How long to wait for WiFi before falling back to display-only operation.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();

    // Initialize hardware
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Allocate heap memory (64 + 32 KB)
    esp_alloc::heap_allocator!(
        #[unsafe(link_section = ".dram2_uninit")] size: 64 * 1024
    );
    esp_alloc::heap_allocator!(size: 32 * 1024);

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // Bring up the display first so the clock runs even without a network
    let mut driver = LedGridDriver::new(peripherals.RMT, binclock::grid_gpio!(peripherals));
    if let Err(e) = driver.clear() {
        println!("main: initial display clear failed: {e:?}");
    }
    let display: &'static SharedDisplay = mk_static!(SharedDisplay, Mutex::new(driver));
    spawner
        .spawn(render_loop_task(display, binclock::status_gpio!(peripherals)))
        .ok();

    // Initialize network stack and spawn network tasks
    let (stack, runner, controller) = init_network_stack(peripherals.WIFI);
    spawner.spawn(wifi_connection_task(controller)).ok();
    spawner.spawn(network_runner_task(runner)).ok();

    // Network-dependent tasks only start once connectivity exists; without
    // it the clock keeps ticking from its unsynced baseline
    match with_timeout(CONNECT_TIMEOUT, wait_for_connection(stack)).await {
        Ok(net_config) => {
            println!("main: got ip {}", net_config.address);
            spawner.spawn(time_sync_task(stack)).ok();

            let http_controller = mk_static!(
                ClockHttpController,
                ClockHttpController::new(display, stack)
            );
            spawner.spawn(http_server_task(stack, http_controller)).ok();
        }
        Err(_) => {
            println!("main: wifi connection timed out, running display-only");
        }
    }

    loop {
        Timer::after(Duration::from_secs(5)).await;
    }
}
