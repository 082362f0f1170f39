mod tests {
    use binclock_core::command::Command;
    use binclock_core::state::ClockMode;

    #[test]
    fn test_fixed_paths() {
        assert_eq!(Command::parse("/"), Command::Home);
        assert_eq!(Command::parse("/status"), Command::Status);
        assert_eq!(Command::parse("/sync"), Command::Sync);
        assert_eq!(Command::parse("/clear"), Command::Clear);
        assert_eq!(Command::parse("/brightness/up"), Command::BrightnessUp);
        assert_eq!(Command::parse("/brightness/down"), Command::BrightnessDown);
    }

    #[test]
    fn test_mode_paths() {
        assert_eq!(
            Command::parse("/mode/binary"),
            Command::SetMode(ClockMode::Binary)
        );
        assert_eq!(
            Command::parse("/mode/rainbow"),
            Command::SetMode(ClockMode::Rainbow)
        );
        assert_eq!(Command::parse("/mode/strobe"), Command::ModeUnknown);
        assert_eq!(Command::parse("/mode/"), Command::ModeUnknown);
    }

    #[test]
    fn test_brightness_paths() {
        assert_eq!(Command::parse("/brightness/5"), Command::SetBrightness(5));
        assert_eq!(
            Command::parse("/brightness/150"),
            Command::SetBrightness(150)
        );
        assert_eq!(Command::parse("/brightness/abc"), Command::BrightnessInvalid);
        assert_eq!(Command::parse("/brightness/"), Command::BrightnessInvalid);
        assert_eq!(
            Command::parse("/brightness/10x"),
            Command::BrightnessInvalid
        );
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(Command::parse("/foo"), Command::NotFound);
        assert_eq!(Command::parse(""), Command::NotFound);
        assert_eq!(Command::parse("/modes/binary"), Command::NotFound);
        assert_eq!(Command::parse("/status/extra"), Command::NotFound);
    }
}
