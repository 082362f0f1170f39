mod tests {
    use binclock_core::palette::DEEP_PINK;
    use binclock_core::render::{PIXEL_COUNT, PixelBuffer, render};
    use binclock_core::state::ClockMode;
    use binclock_core::time::TimeSample;

    fn binary_frame(time: TimeSample, brightness: u8) -> PixelBuffer {
        render(time, ClockMode::Binary, brightness, 0, &DEEP_PINK)
    }

    fn lit_cells(frame: &PixelBuffer, range: core::ops::Range<usize>) -> u32 {
        frame[range]
            .iter()
            .filter(|c| **c != DEEP_PINK.off)
            .count() as u32
    }

    #[test]
    fn test_lit_count_matches_popcount_for_all_times() {
        for hour in 0..24u8 {
            for minute in 0..60u8 {
                // Odd second keeps the accent cell dark
                let frame = binary_frame(TimeSample::new(hour, minute, 1), 100);
                assert_eq!(
                    lit_cells(&frame, 0..10),
                    u32::from(hour).count_ones(),
                    "hour {hour}"
                );
                assert_eq!(
                    lit_cells(&frame, 10..20),
                    u32::from(minute).count_ones(),
                    "minute {minute}"
                );
                assert_eq!(lit_cells(&frame, 20..25), 0);
            }
        }
    }

    #[test]
    fn test_channels_monotonic_in_brightness() {
        let time = TimeSample::new(23, 59, 1);
        let levels = [10u8, 30, 50, 70, 100];
        for pair in levels.windows(2) {
            let dimmer = binary_frame(time, pair[0]);
            let brighter = binary_frame(time, pair[1]);
            for (lo, hi) in dimmer.iter().zip(brighter.iter()) {
                assert!(lo.r <= hi.r && lo.g <= hi.g && lo.b <= hi.b);
            }
        }

        // Unlit cells stay off regardless of brightness
        let frame = binary_frame(TimeSample::new(0, 0, 1), 100);
        assert!(frame.iter().all(|c| *c == DEEP_PINK.off));
    }

    #[test]
    fn test_frame_for_14_35_42() {
        let frame = binary_frame(TimeSample::new(14, 35, 42), 100);

        // 14 = 0b1110: bits 1..=3 light hour-field cells 1..=3
        let hour_cells = [1, 2, 3];
        // 35 = 0b100011: bits 0, 1 and 5 light minute-field cells 0, 1 and 5
        let minute_cells = [10, 11, 15];
        // 42 is even: the seconds indicator at (2, 4) is lit
        let accent_cell = 22;

        for (i, pixel) in frame.iter().enumerate() {
            if hour_cells.contains(&i) || minute_cells.contains(&i) {
                assert_eq!(*pixel, DEEP_PINK.on, "cell {i}");
            } else if i == accent_cell {
                assert_eq!(*pixel, DEEP_PINK.accent);
            } else {
                assert_eq!(*pixel, DEEP_PINK.off, "cell {i}");
            }
        }
    }

    #[test]
    fn test_seconds_indicator_blinks() {
        let even = binary_frame(TimeSample::new(8, 30, 42), 100);
        let odd = binary_frame(TimeSample::new(8, 30, 43), 100);
        assert_eq!(even[22], DEEP_PINK.accent);
        assert_eq!(odd[22], DEEP_PINK.off);
    }

    #[test]
    fn test_render_is_pure() {
        let time = TimeSample::new(14, 35, 42);
        let first = render(time, ClockMode::Binary, 70, 123, &DEEP_PINK);
        let second = render(time, ClockMode::Binary, 70, 456, &DEEP_PINK);
        assert_eq!(first, second);

        let first = render(time, ClockMode::Rainbow, 70, 1234, &DEEP_PINK);
        let second = render(time, ClockMode::Rainbow, 70, 1234, &DEEP_PINK);
        assert_eq!(first, second);
    }

    #[test]
    fn test_rainbow_ignores_time() {
        let a = render(TimeSample::new(0, 0, 0), ClockMode::Rainbow, 80, 5000, &DEEP_PINK);
        let b = render(TimeSample::new(23, 59, 59), ClockMode::Rainbow, 80, 5000, &DEEP_PINK);
        assert_eq!(a, b);
    }

    #[test]
    fn test_rainbow_phase_wraps_after_full_cycle() {
        let start = render(TimeSample::MIDNIGHT, ClockMode::Rainbow, 100, 0, &DEEP_PINK);
        let cycled = render(
            TimeSample::MIDNIGHT,
            ClockMode::Rainbow,
            100,
            360 * 50,
            &DEEP_PINK,
        );
        assert_eq!(start, cycled);

        // Mid-cycle the frame has moved
        let moved = render(TimeSample::MIDNIGHT, ClockMode::Rainbow, 100, 180 * 50, &DEEP_PINK);
        assert_ne!(start, moved);
    }

    #[test]
    fn test_rainbow_first_cell_starts_red() {
        let frame = render(TimeSample::MIDNIGHT, ClockMode::Rainbow, 100, 0, &DEEP_PINK);
        assert_eq!((frame[0].r, frame[0].g, frame[0].b), (255, 0, 0));
        assert_eq!(frame.len(), PIXEL_COUNT);
    }
}
