//! Control command set, parsed from request paths.

use crate::state::ClockMode;

/// One inbound control command.
///
/// Invalid input is represented explicitly (`ModeUnknown`,
/// `BrightnessInvalid`) so the caller can answer with the unchanged state
/// instead of surfacing a parse fault to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `/` — full status page
    Home,
    /// `/status` — machine-readable snapshot
    Status,
    /// `/mode/{binary|rainbow}`
    SetMode(ClockMode),
    /// `/mode/{anything else}` — state stays as it is
    ModeUnknown,
    /// `/brightness/up`
    BrightnessUp,
    /// `/brightness/down`
    BrightnessDown,
    /// `/brightness/{n}` — raw value, clamped on apply
    SetBrightness(i32),
    /// `/brightness/{not a number}` — brightness stays as it is
    BrightnessInvalid,
    /// `/sync`
    Sync,
    /// `/clear`
    Clear,
    /// Any other path
    NotFound,
}

impl Command {
    pub fn parse(path: &str) -> Self {
        match path {
            "/" => Command::Home,
            "/status" => Command::Status,
            "/sync" => Command::Sync,
            "/clear" => Command::Clear,
            "/brightness/up" => Command::BrightnessUp,
            "/brightness/down" => Command::BrightnessDown,
            _ => {
                if let Some(name) = path.strip_prefix("/mode/") {
                    ClockMode::parse(name).map_or(Command::ModeUnknown, Command::SetMode)
                } else if let Some(value) = path.strip_prefix("/brightness/") {
                    value
                        .parse::<i32>()
                        .map_or(Command::BrightnessInvalid, Command::SetBrightness)
                } else {
                    Command::NotFound
                }
            }
        }
    }
}
