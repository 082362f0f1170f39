mod clock_state;
mod wall_clock;

pub use clock_state::{ClockStateService, SyncOutcome};
pub(crate) use clock_state::{publish_sync_result, wait_for_sync_request};
pub use wall_clock::WallClockService;
