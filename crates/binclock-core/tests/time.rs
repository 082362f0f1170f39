mod tests {
    use binclock_core::time::TimeSample;

    #[test]
    fn test_from_local_secs() {
        assert_eq!(TimeSample::from_local_secs(0), TimeSample::MIDNIGHT);
        assert_eq!(
            TimeSample::from_local_secs(14 * 3600 + 35 * 60 + 42),
            TimeSample::new(14, 35, 42)
        );
        // Wraps at the end of a day
        assert_eq!(
            TimeSample::from_local_secs(86_400 + 1),
            TimeSample::new(0, 0, 1)
        );
        assert_eq!(
            TimeSample::from_local_secs(86_399),
            TimeSample::new(23, 59, 59)
        );
    }

    #[test]
    fn test_format_zero_pads() {
        assert_eq!(TimeSample::new(14, 35, 42).format(), "14:35:42");
        assert_eq!(TimeSample::new(7, 5, 9).format(), "07:05:09");
        assert_eq!(TimeSample::MIDNIGHT.format(), "00:00:00");
    }
}
