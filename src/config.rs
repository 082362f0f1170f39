use binclock_core::palette::{self, Palette};
use binclock_core::state::ClockState;

pub(crate) struct WifiConfig {
    pub ssid: &'static str,
    pub password: &'static str,
    pub hostname: &'static str,
}

pub(crate) struct TimeConfig {
    pub ntp_server: &'static str,
    /// Whole hours added to UTC once at sync time
    pub utc_offset_hours: i32,
    pub sync_interval_secs: u64,
}

pub(crate) struct HttpConfig {
    pub port: u16,
    pub socket_timeout_secs: u64,
}

pub(crate) struct DisplayConfig {
    pub tick_period_secs: u64,
    pub palette: Palette,
    pub initial_state: ClockState,
}

pub(crate) const WIFI: WifiConfig = WifiConfig {
    ssid: match option_env!("WIFI_SSID") {
        Some(ssid) => ssid,
        None => "binclock",
    },
    password: match option_env!("WIFI_PASSWORD") {
        Some(password) => password,
        None => "changeme",
    },
    hostname: "binclock",
};

pub(crate) const TIME: TimeConfig = TimeConfig {
    ntp_server: "pool.ntp.org",
    utc_offset_hours: -8,
    sync_interval_secs: 3600,
};

pub(crate) const HTTP: HttpConfig = HttpConfig {
    port: 80,
    socket_timeout_secs: 30,
};

pub(crate) const DISPLAY: DisplayConfig = DisplayConfig {
    tick_period_secs: 1,
    palette: palette::DEEP_PINK,
    initial_state: ClockState::new(),
};

/// Data line of the 5x5 grid
#[macro_export]
macro_rules! grid_gpio {
    ($p:expr) => {
        $p.GPIO16
    };
}

/// Onboard status LED used as the heartbeat
#[macro_export]
macro_rules! status_gpio {
    ($p:expr) => {
        $p.GPIO2
    };
}
