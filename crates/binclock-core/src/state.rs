//! Presentation state and its transition operations.
//!
//! All mutation of the shared clock state goes through the named
//! transitions here, so clamping and fallback rules live in one place.

pub const BRIGHTNESS_MIN: u8 = 10;
pub const BRIGHTNESS_MAX: u8 = 100;
pub const BRIGHTNESS_STEP: u8 = 10;

pub const DEFAULT_BRIGHTNESS: u8 = 50;

/// Display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockMode {
    Binary,
    Rainbow,
}

impl ClockMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ClockMode::Binary => "binary",
            ClockMode::Rainbow => "rainbow",
        }
    }

    /// Parse a mode name; anything unrecognized is rejected.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "binary" => Some(ClockMode::Binary),
            "rainbow" => Some(ClockMode::Rainbow),
            _ => None,
        }
    }

    pub(crate) const fn as_u8(self) -> u8 {
        match self {
            ClockMode::Binary => 0,
            ClockMode::Rainbow => 1,
        }
    }

    pub(crate) const fn from_u8(value: u8) -> Self {
        match value {
            1 => ClockMode::Rainbow,
            _ => ClockMode::Binary,
        }
    }
}

/// The shared presentation state: display mode plus brightness percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockState {
    pub mode: ClockMode,
    pub brightness: u8,
}

impl ClockState {
    pub const fn new() -> Self {
        Self {
            mode: ClockMode::Binary,
            brightness: DEFAULT_BRIGHTNESS,
        }
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: ClockMode) -> Self {
        self.mode = mode;
        self
    }

    /// Step brightness up by one notch, clamped at the maximum.
    #[must_use]
    pub fn brightness_up(mut self) -> Self {
        self.brightness = (self.brightness + BRIGHTNESS_STEP).min(BRIGHTNESS_MAX);
        self
    }

    /// Step brightness down by one notch, clamped at the minimum.
    #[must_use]
    pub fn brightness_down(mut self) -> Self {
        self.brightness = self
            .brightness
            .saturating_sub(BRIGHTNESS_STEP)
            .max(BRIGHTNESS_MIN);
        self
    }

    /// Set an absolute brightness, clamping any input into the valid range.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn with_brightness(mut self, requested: i32) -> Self {
        self.brightness =
            requested.clamp(i32::from(BRIGHTNESS_MIN), i32::from(BRIGHTNESS_MAX)) as u8;
        self
    }

    /// Pack into one word so the whole state fits a single atomic cell.
    pub const fn pack(self) -> u16 {
        (self.mode.as_u8() as u16) << 8 | self.brightness as u16
    }

    /// Inverse of [`ClockState::pack`]. Out-of-range raw values decode to a
    /// valid state rather than failing.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn unpack(raw: u16) -> Self {
        let brightness = (raw & 0xFF) as u8;
        Self {
            mode: ClockMode::from_u8((raw >> 8) as u8),
            brightness: clamp_brightness(brightness),
        }
    }
}

impl Default for ClockState {
    fn default() -> Self {
        Self::new()
    }
}

const fn clamp_brightness(value: u8) -> u8 {
    if value < BRIGHTNESS_MIN {
        BRIGHTNESS_MIN
    } else if value > BRIGHTNESS_MAX {
        BRIGHTNESS_MAX
    } else {
        value
    }
}
