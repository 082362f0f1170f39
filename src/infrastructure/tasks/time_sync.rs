//! Periodic NTP synchronization
//!
//! Syncs the wall clock right after the network comes up, then hourly, and
//! additionally whenever an operator asks for it over HTTP. Operator
//! requests get the outcome reported back so the response can say whether
//! the sync worked.

use embassy_futures::select::{Either, select};
use embassy_net::Stack;
use embassy_time::{Duration, Ticker};
use esp_println::println;

use crate::config;
use crate::infrastructure::services::{WallClockService, publish_sync_result, wait_for_sync_request};
use crate::net::ntp;

#[embassy_executor::task]
pub async fn time_sync_task(stack: Stack<'static>) {
    let clock = WallClockService;
    perform_sync(stack, &clock).await;

    let mut ticker = Ticker::every(Duration::from_secs(config::TIME.sync_interval_secs));
    loop {
        match select(ticker.next(), wait_for_sync_request()).await {
            Either::First(()) => {
                perform_sync(stack, &clock).await;
            }
            Either::Second(()) => {
                let ok = perform_sync(stack, &clock).await;
                publish_sync_result(ok);
            }
        }
    }
}

async fn perform_sync(stack: Stack<'static>, clock: &WallClockService) -> bool {
    match ntp::fetch_unix_time(stack, config::TIME.ntp_server).await {
        Ok(unix_secs) => {
            clock.set_from_unix(unix_secs);
            println!("time_sync: synced, local time is {}", clock.now().format());
            true
        }
        Err(e) => {
            println!("time_sync: sync failed: {e:?}");
            false
        }
    }
}
