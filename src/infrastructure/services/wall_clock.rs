use core::cell::Cell;

use embassy_sync::blocking_mutex::CriticalSectionMutex;
use embassy_time::Instant;

use binclock_core::time::TimeSample;

use crate::config;

#[derive(Debug, Clone, Copy)]
struct SyncPoint {
    local_secs: u64,
    at_uptime_ms: u64,
}

/// Last sync anchor. The target has no 64-bit atomics, so the pair is
/// guarded by a critical section instead.
static SYNC_POINT: CriticalSectionMutex<Cell<Option<SyncPoint>>> =
    CriticalSectionMutex::new(Cell::new(None));

/// Software wall clock derived from the monotonic timer and the most
/// recent NTP anchor. Before the first sync it counts up from 00:00:00.
#[derive(Debug, Default, Clone, Copy)]
pub struct WallClockService;

impl WallClockService {
    /// Current local time of day.
    pub fn now(&self) -> TimeSample {
        let uptime_ms = Instant::now().as_millis();
        let local_secs = match SYNC_POINT.lock(Cell::get) {
            Some(point) => point.local_secs + (uptime_ms - point.at_uptime_ms) / 1000,
            None => uptime_ms / 1000,
        };
        TimeSample::from_local_secs(local_secs)
    }

    /// Anchor the clock to a UTC epoch timestamp. The timezone offset is
    /// applied here, once, so every later read is already local.
    pub fn set_from_unix(&self, utc_secs: u64) {
        let local_secs =
            utc_secs.saturating_add_signed(i64::from(config::TIME.utc_offset_hours) * 3600);
        let point = SyncPoint {
            local_secs,
            at_uptime_ms: Instant::now().as_millis(),
        };
        SYNC_POINT.lock(|cell| cell.set(Some(point)));
    }

    pub fn is_synced(&self) -> bool {
        SYNC_POINT.lock(|cell| cell.get().is_some())
    }
}
