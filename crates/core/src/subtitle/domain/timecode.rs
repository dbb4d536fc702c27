//! Millisecond-offset formatting for the two subtitle timestamp styles.

/// Format a millisecond offset as an SRT timestamp: `HH:MM:SS,mmm`.
///
/// Hours are zero-padded to two digits but have no upper bound.
pub fn srt_timestamp(ms: u64) -> String {
    let (seconds, millis) = (ms / 1000, ms % 1000);
    let (minutes, seconds) = (seconds / 60, seconds % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);
    format!("{hours:02}:{minutes:02}:{seconds:02},{millis:03}")
}

/// Format a millisecond offset as an ASS timestamp: `H:MM:SS.cc`.
///
/// Centiseconds are truncated from milliseconds; hours are not zero-padded.
pub fn ass_timestamp(ms: u64) -> String {
    let centis = ms / 10;
    let (seconds, centis) = (centis / 100, centis % 100);
    let (minutes, seconds) = (seconds / 60, seconds % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);
    format!("{hours}:{minutes:02}:{seconds:02}.{centis:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srt_zero() {
        assert_eq!(srt_timestamp(0), "00:00:00,000");
    }

    #[test]
    fn test_srt_components() {
        assert_eq!(srt_timestamp(10000), "00:00:10,000");
        assert_eq!(srt_timestamp(61234), "00:01:01,234");
        assert_eq!(srt_timestamp(3_600_000), "01:00:00,000");
    }

    #[test]
    fn test_srt_hours_unbounded() {
        // 100 hours
        assert_eq!(srt_timestamp(100 * 3_600_000), "100:00:00,000");
    }

    #[test]
    fn test_srt_round_trips() {
        for ms in [0u64, 999, 1000, 59_999, 61_234, 3_599_999, 86_400_000] {
            let formatted = srt_timestamp(ms);
            let (clock, millis) = formatted.split_once(',').unwrap();
            let parts: Vec<u64> = clock.split(':').map(|p| p.parse().unwrap()).collect();
            let parsed =
                ((parts[0] * 60 + parts[1]) * 60 + parts[2]) * 1000 + millis.parse::<u64>().unwrap();
            assert_eq!(parsed, ms);
        }
    }

    #[test]
    fn test_ass_zero() {
        assert_eq!(ass_timestamp(0), "0:00:00.00");
    }

    #[test]
    fn test_ass_components() {
        assert_eq!(ass_timestamp(10000), "0:00:10.00");
        assert_eq!(ass_timestamp(61_234), "0:01:01.23");
        assert_eq!(ass_timestamp(3_600_000), "1:00:00.00");
    }

    #[test]
    fn test_ass_hours_not_padded() {
        assert_eq!(ass_timestamp(12 * 3_600_000), "12:00:00.00");
        assert!(!ass_timestamp(3_600_000).starts_with('0'));
    }

    #[test]
    fn test_ass_centiseconds_truncated() {
        assert_eq!(ass_timestamp(19), "0:00:00.01");
        assert_eq!(ass_timestamp(9), "0:00:00.00");
    }
}
