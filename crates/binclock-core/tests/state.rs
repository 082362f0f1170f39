mod tests {
    use binclock_core::state::{BRIGHTNESS_MAX, BRIGHTNESS_MIN, ClockMode, ClockState};

    #[test]
    fn test_absolute_brightness_clamps() {
        let cases = [(5, 10), (10, 10), (55, 55), (100, 100), (150, 100)];
        for (input, expected) in cases {
            let state = ClockState::new().with_brightness(input);
            assert_eq!(state.brightness, expected, "input {input}");
        }

        // Negative input clamps to the floor instead of wrapping
        assert_eq!(ClockState::new().with_brightness(-5).brightness, 10);
    }

    #[test]
    fn test_brightness_steps_round_trip_mid_range() {
        let start = ClockState::new().with_brightness(50);
        let stepped = start.brightness_up().brightness_down();
        assert_eq!(stepped, start);
    }

    #[test]
    fn test_brightness_steps_do_not_round_trip_at_bounds() {
        let top = ClockState::new().with_brightness(100);
        assert_eq!(top.brightness_up().brightness, BRIGHTNESS_MAX);
        assert_eq!(top.brightness_up().brightness_down().brightness, 90);

        let bottom = ClockState::new().with_brightness(10);
        assert_eq!(bottom.brightness_down().brightness, BRIGHTNESS_MIN);
        assert_eq!(bottom.brightness_down().brightness_up().brightness, 20);
    }

    #[test]
    fn test_set_mode_is_idempotent() {
        let once = ClockState::new().with_mode(ClockMode::Rainbow);
        let twice = once.with_mode(ClockMode::Rainbow);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unrecognized_mode_is_rejected() {
        assert_eq!(ClockMode::parse("binary"), Some(ClockMode::Binary));
        assert_eq!(ClockMode::parse("rainbow"), Some(ClockMode::Rainbow));
        assert_eq!(ClockMode::parse("disco"), None);
        assert_eq!(ClockMode::parse(""), None);
        assert_eq!(ClockMode::parse("Binary"), None);
    }

    #[test]
    fn test_pack_round_trips() {
        for mode in [ClockMode::Binary, ClockMode::Rainbow] {
            for brightness in (10..=100).step_by(5) {
                let state = ClockState {
                    mode,
                    brightness,
                };
                assert_eq!(ClockState::unpack(state.pack()), state);
            }
        }
    }

    #[test]
    fn test_unpack_repairs_out_of_range_raw() {
        // Brightness byte below the floor
        let state = ClockState::unpack(0x0005);
        assert_eq!(state.brightness, BRIGHTNESS_MIN);
        assert_eq!(state.mode, ClockMode::Binary);

        // Brightness byte above the ceiling, unknown mode byte
        let state = ClockState::unpack(0x07FF);
        assert_eq!(state.brightness, BRIGHTNESS_MAX);
        assert_eq!(state.mode, ClockMode::Binary);
    }
}
