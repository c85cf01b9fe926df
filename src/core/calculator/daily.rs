use crate::models::daily::DayPunches;
use crate::utils::time::time_to_minutes;

/// Worked hours for one day.
///
/// Without both entry and exit the day is worth 0 hours. The lunch break is
/// subtracted only when both lunch punches exist; a lone lunch punch is
/// ignored. Exit before entry gives a negative result.
pub fn compute_daily_hours(day: &DayPunches) -> f64 {
    let entry = time_to_minutes(day.entry.as_deref());
    let exit = time_to_minutes(day.exit.as_deref());

    let (Some(entry), Some(exit)) = (entry, exit) else {
        return 0.0;
    };

    // f64 so that huge stored labels cannot overflow the subtraction.
    let mut worked = exit as f64 - entry as f64;

    if let (Some(lunch_start), Some(lunch_end)) = (
        time_to_minutes(day.lunch_start.as_deref()),
        time_to_minutes(day.lunch_end.as_deref()),
    ) {
        worked -= lunch_end as f64 - lunch_start as f64;
    }

    worked / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(entry: Option<&str>, ls: Option<&str>, le: Option<&str>, exit: Option<&str>) -> DayPunches {
        DayPunches {
            entry: entry.map(String::from),
            lunch_start: ls.map(String::from),
            lunch_end: le.map(String::from),
            exit: exit.map(String::from),
        }
    }

    #[test]
    fn full_day_subtracts_lunch() {
        let d = day(Some("08:00"), Some("12:00"), Some("13:00"), Some("17:00"));
        assert_eq!(compute_daily_hours(&d), 8.0);
    }

    #[test]
    fn no_lunch_counts_whole_span() {
        let d = day(Some("08:00"), None, None, Some("17:00"));
        assert_eq!(compute_daily_hours(&d), 9.0);
    }

    #[test]
    fn single_lunch_punch_is_ignored() {
        let d = day(Some("08:00"), Some("12:00"), None, Some("17:00"));
        assert_eq!(compute_daily_hours(&d), 9.0);

        let d = day(Some("08:00"), None, Some("13:00"), Some("17:00"));
        assert_eq!(compute_daily_hours(&d), 9.0);
    }

    #[test]
    fn missing_entry_or_exit_is_zero() {
        let d = day(None, Some("12:00"), Some("13:00"), None);
        assert_eq!(compute_daily_hours(&d), 0.0);

        let d = day(Some("08:00"), Some("12:00"), Some("13:00"), None);
        assert_eq!(compute_daily_hours(&d), 0.0);

        let d = day(None, None, None, Some("17:00"));
        assert_eq!(compute_daily_hours(&d), 0.0);
    }

    #[test]
    fn exit_before_entry_is_negative() {
        let d = day(Some("17:00"), None, None, Some("15:30"));
        assert_eq!(compute_daily_hours(&d), -1.5);
    }

    #[test]
    fn midnight_entry_is_a_real_punch() {
        let d = day(Some("00:00"), None, None, Some("06:00"));
        assert_eq!(compute_daily_hours(&d), 6.0);
    }

    #[test]
    fn unparseable_label_counts_as_missing() {
        let d = day(Some("08:00"), Some("xx:yy"), Some("13:00"), Some("17:00"));
        assert_eq!(compute_daily_hours(&d), 9.0);

        let d = day(Some("8h"), None, None, Some("17:00"));
        assert_eq!(compute_daily_hours(&d), 0.0);
    }

    #[test]
    fn extreme_stored_labels_do_not_panic() {
        let d = day(Some("-9223372036854775807:00"), None, None, Some("17:00"));
        assert_eq!(compute_daily_hours(&d), 0.0);

        // Both in range for i64 minutes, but their difference is not.
        let min = i64::MIN + 1;
        let d = day(
            Some(&format!("0:{min}")),
            None,
            None,
            Some(&format!("0:{}", i64::MAX)),
        );
        let hours = compute_daily_hours(&d);
        assert!(hours.is_finite() && hours > 0.0);
    }

    #[test]
    fn blank_minutes_are_tolerated() {
        let d = day(Some("08:"), None, None, Some("17:"));
        assert_eq!(compute_daily_hours(&d), 9.0);
    }
}
