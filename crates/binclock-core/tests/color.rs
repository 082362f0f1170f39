mod tests {
    use binclock_core::color::{hsv_to_rgb, scale_channel, scale_color};
    use binclock_core::palette::DEEP_PINK;
    use smart_leds::RGB8;

    #[test]
    fn test_scale_channel_truncates() {
        assert_eq!(scale_channel(255, 100), 255);
        assert_eq!(scale_channel(255, 50), 127);
        assert_eq!(scale_channel(20, 50), 10);
        assert_eq!(scale_channel(147, 10), 14);
        assert_eq!(scale_channel(0, 100), 0);
    }

    #[test]
    fn test_scale_color_full_brightness_is_identity() {
        assert_eq!(scale_color(DEEP_PINK.on, 100), DEEP_PINK.on);
        assert_eq!(scale_color(DEEP_PINK.on, 50), RGB8::new(127, 10, 73));
    }

    #[test]
    fn test_hsv_primary_hues() {
        assert_eq!(hsv_to_rgb(0, 100, 100), RGB8::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(120, 100, 100), RGB8::new(0, 255, 0));
        assert_eq!(hsv_to_rgb(240, 100, 100), RGB8::new(0, 0, 255));
    }

    #[test]
    fn test_hsv_sextant_midpoint() {
        // 90 degrees sits exactly halfway through the second sextant
        assert_eq!(hsv_to_rgb(90, 100, 100), RGB8::new(127, 255, 0));
    }

    #[test]
    fn test_hsv_value_scales_brightness() {
        assert_eq!(hsv_to_rgb(0, 100, 50), RGB8::new(127, 0, 0));
        assert_eq!(hsv_to_rgb(0, 100, 0), RGB8::new(0, 0, 0));
    }

    #[test]
    fn test_hsv_zero_saturation_is_grey() {
        let grey = hsv_to_rgb(200, 0, 100);
        assert_eq!(grey.r, grey.g);
        assert_eq!(grey.g, grey.b);
    }

    #[test]
    fn test_hsv_hue_wraps() {
        assert_eq!(hsv_to_rgb(360, 100, 100), hsv_to_rgb(0, 100, 100));
        assert_eq!(hsv_to_rgb(480, 100, 100), hsv_to_rgb(120, 100, 100));
    }
}
