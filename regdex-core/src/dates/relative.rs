use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Floor counts of elapsed whole units, coarsest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Elapsed {
    years: i64,
    months: i64,
    weeks: i64,
    days: i64,
    hours: i64,
    minutes: i64,
}

/// Describe how long ago `date` was, relative to `now`.
///
/// Picks the coarsest unit with a nonzero count among years, months, weeks,
/// days, hours and minutes, e.g. `"3 days ago"` or `"1 hour ago"`. Less than
/// a minute, or a `date` in the future, reads `"now"`. Calendar units are
/// counted in `now`'s time zone.
pub fn relative_time<Tz1, Tz2>(
    date: &DateTime<Tz1>,
    now: &DateTime<Tz2>,
) -> String
where
    Tz1: TimeZone,
    Tz2: TimeZone,
{
    let date = date.with_timezone(&now.timezone());
    let elapsed = elapsed(&date, now);

    let buckets = [
        (elapsed.years, "year"),
        (elapsed.months, "month"),
        (elapsed.weeks, "week"),
        (elapsed.days, "day"),
        (elapsed.hours, "hour"),
        (elapsed.minutes, "minute"),
    ];

    buckets
        .into_iter()
        .find(|(count, _)| *count > 0)
        .map(|(count, unit)| {
            let plural = if count > 1 { "s" } else { "" };
            format!("{count} {unit}{plural} ago")
        })
        .unwrap_or_else(|| "now".to_string())
}

/// [`relative_time`] against the local clock.
pub fn relative_time_from_now<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    relative_time(date, &Local::now())
}

fn elapsed<Tz: TimeZone>(date: &DateTime<Tz>, now: &DateTime<Tz>) -> Elapsed {
    let delta = now.clone() - date.clone();
    let days = delta.num_days();
    let months = calendar_months(date.naive_local(), now.naive_local());

    Elapsed {
        years: months / 12,
        months,
        weeks: days / 7,
        days,
        hours: delta.num_hours(),
        minutes: delta.num_minutes(),
    }
}

/// Whole calendar months from `start` to `end`; zero when `end` is not later.
fn calendar_months(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    if end <= start {
        return 0;
    }

    let mut months = (i64::from(end.year()) - i64::from(start.year())) * 12
        + i64::from(end.month())
        - i64::from(start.month());

    if months > 0 && !month_anniversary_reached(start, end) {
        months -= 1;
    }
    months.max(0)
}

fn month_anniversary_reached(start: NaiveDateTime, end: NaiveDateTime) -> bool {
    if (end.day(), end.time()) >= (start.day(), start.time()) {
        return true;
    }
    // Jan 31 -> Feb 28 counts as a full month.
    is_last_day_of_month(end.date())
        && start.day() > end.day()
        && end.time() >= start.time()
}

fn is_last_day_of_month(date: NaiveDate) -> bool {
    date.succ_opt().is_none_or(|next| next.month() != date.month())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn ago(delta: TimeDelta) -> String {
        relative_time(&(now() - delta), &now())
    }

    #[test]
    fn under_a_minute_is_now() {
        assert_eq!(ago(TimeDelta::seconds(30)), "now");
        assert_eq!(ago(TimeDelta::zero()), "now");
    }

    #[test]
    fn future_dates_are_now() {
        assert_eq!(ago(TimeDelta::hours(-5)), "now");
    }

    #[test]
    fn minutes_and_hours() {
        assert_eq!(ago(TimeDelta::minutes(1)), "1 minute ago");
        assert_eq!(ago(TimeDelta::minutes(59)), "59 minutes ago");
        assert_eq!(ago(TimeDelta::minutes(90)), "1 hour ago");
        assert_eq!(ago(TimeDelta::hours(23)), "23 hours ago");
    }

    #[test]
    fn days_and_weeks() {
        assert_eq!(ago(TimeDelta::days(1)), "1 day ago");
        assert_eq!(ago(TimeDelta::days(6)), "6 days ago");
        assert_eq!(ago(TimeDelta::days(7)), "1 week ago");
        assert_eq!(ago(TimeDelta::days(20)), "2 weeks ago");
    }

    #[test]
    fn calendar_months_and_years() {
        let date = Utc.with_ymd_and_hms(2026, 8, 19, 12, 0, 0).unwrap();
        assert_eq!(relative_time(&date, &now()), "2 months ago");

        let almost = Utc.with_ymd_and_hms(2026, 9, 19, 12, 0, 1).unwrap();
        assert_eq!(relative_time(&almost, &now()), "4 weeks ago");

        let two_years = Utc.with_ymd_and_hms(2024, 10, 19, 12, 0, 0).unwrap();
        assert_eq!(relative_time(&two_years, &now()), "2 years ago");

        let one_year = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(relative_time(&one_year, &now()), "1 year ago");
    }

    #[test]
    fn month_end_counts_as_full_month() {
        let start = Utc.with_ymd_and_hms(2026, 1, 31, 8, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 2, 28, 9, 0, 0).unwrap();
        assert_eq!(relative_time(&start, &end), "1 month ago");
    }

    #[test]
    fn mixed_time_zones_compare_instants() {
        let offset = chrono::FixedOffset::west_opt(5 * 3600).unwrap();
        let date = (now() - TimeDelta::minutes(3)).with_timezone(&offset);
        assert_eq!(relative_time(&date, &now()), "3 minutes ago");
    }
}
