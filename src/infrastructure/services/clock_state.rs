use core::sync::atomic::{AtomicU16, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, with_timeout};

use binclock_core::state::{ClockMode, ClockState};

use crate::config;

/// Global presentation state, packed into one word so a render snapshot
/// can never observe a half-applied mutation.
static CLOCK_STATE: AtomicU16 = AtomicU16::new(config::DISPLAY.initial_state.pack());

static SYNC_REQUEST: Signal<CriticalSectionRawMutex, ()> = Signal::new();
static SYNC_RESULT: Signal<CriticalSectionRawMutex, bool> = Signal::new();

/// How long a control request waits for the sync task before answering.
const SYNC_WAIT: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    Synced,
    Failed,
    /// The sync is still running; the previous time stays in effect until
    /// it completes.
    Pending,
}

/// Handle for reading and mutating the shared presentation state.
///
/// All mutations funnel through the named operations below.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClockStateService;

impl ClockStateService {
    /// Consistent snapshot of mode and brightness.
    pub fn snapshot(&self) -> ClockState {
        ClockState::unpack(CLOCK_STATE.load(Ordering::Relaxed))
    }

    pub fn set_mode(&self, mode: ClockMode) -> ClockState {
        Self::store(self.snapshot().with_mode(mode))
    }

    pub fn brightness_up(&self) -> ClockState {
        Self::store(self.snapshot().brightness_up())
    }

    pub fn brightness_down(&self) -> ClockState {
        Self::store(self.snapshot().brightness_down())
    }

    pub fn set_brightness(&self, requested: i32) -> ClockState {
        Self::store(self.snapshot().with_brightness(requested))
    }

    /// Hand a sync request to the time-sync task and wait a bounded time
    /// for its verdict. The network I/O happens in that task, never while
    /// the caller holds any state access.
    pub async fn request_sync(&self) -> SyncOutcome {
        SYNC_RESULT.reset();
        SYNC_REQUEST.signal(());
        match with_timeout(SYNC_WAIT, SYNC_RESULT.wait()).await {
            Ok(true) => SyncOutcome::Synced,
            Ok(false) => SyncOutcome::Failed,
            Err(_) => SyncOutcome::Pending,
        }
    }

    fn store(state: ClockState) -> ClockState {
        CLOCK_STATE.store(state.pack(), Ordering::Relaxed);
        state
    }
}

/// Wait for an operator-requested sync. Used by the time-sync task.
pub(crate) async fn wait_for_sync_request() {
    SYNC_REQUEST.wait().await;
}

/// Report a sync outcome back to a waiting control request.
pub(crate) fn publish_sync_result(ok: bool) {
    SYNC_RESULT.signal(ok);
}
