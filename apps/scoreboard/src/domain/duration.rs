fn pad(n: i64) -> String {
    format!("{n:02}")
}

/// Format milliseconds as `MM:SS`, or `H:MM:SS` once an hour has passed.
pub fn format_duration_ms(ms: i64) -> String {
    let seconds = ms.max(0) / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;

    let mm_ss = format!("{}:{}", pad(minutes - hours * 60), pad(seconds - minutes * 60));
    if hours > 0 {
        format!("{hours}:{mm_ss}")
    } else {
        mm_ss
    }
}

#[cfg(test)]
mod tests {
    use super::format_duration_ms;

    #[test]
    fn formats_minutes_and_hours() {
        assert_eq!(format_duration_ms(0), "00:00");
        assert_eq!(format_duration_ms(999), "00:00");
        assert_eq!(format_duration_ms(61_000), "01:01");
        assert_eq!(format_duration_ms(3_600_000), "1:00:00");
        assert_eq!(format_duration_ms(3_725_000), "1:02:05");
        assert_eq!(format_duration_ms(-5), "00:00");
    }
}
