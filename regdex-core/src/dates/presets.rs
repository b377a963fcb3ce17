use chrono::{
    DateTime, Days, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta,
    TimeZone,
};
use regdex_model::{DateRange, DateRangePreset, PRESETS, PresetName};
use tracing::debug;

use crate::{CatalogError, Result};

/// The preset table, in picker order.
pub fn presets() -> &'static [DateRangePreset] {
    PRESETS
}

pub fn preset_label(name: &str) -> Option<&'static str> {
    PRESETS
        .iter()
        .find(|preset| preset.name == name)
        .map(|preset| preset.label)
}

/// Resolve a preset against the local clock.
pub fn resolve_preset(name: &str) -> Result<DateRange<Local>> {
    resolve_preset_at(name, &Local::now())
}

/// Resolve a preset into an inclusive instant range anchored on `now`.
///
/// `from` is 00:00:00.000 of the first day and `to` is 23:59:59.999 of the
/// last day, both in `now`'s time zone. Reserved presets (`thisWeek`,
/// `lastWeek`, `thisMonth`, `lastMonth`) are rejected like unknown names.
pub fn resolve_preset_at<Tz: TimeZone>(
    name: &str,
    now: &DateTime<Tz>,
) -> Result<DateRange<Tz>> {
    let preset = PresetName::from_key(name)
        .filter(|preset| !preset.is_reserved())
        .ok_or_else(|| CatalogError::UnknownPreset(name.to_string()))?;

    let today = now.date_naive();
    let (first, last) = match preset {
        PresetName::Today => (today, today),
        PresetName::Yesterday => {
            let yesterday = days_before(today, 1);
            (yesterday, yesterday)
        }
        PresetName::Last7 => (days_before(today, 6), today),
        PresetName::Last14 => (days_before(today, 13), today),
        PresetName::Last30 => (days_before(today, 29), today),
        PresetName::ThisWeek
        | PresetName::LastWeek
        | PresetName::ThisMonth
        | PresetName::LastMonth => {
            return Err(CatalogError::UnknownPreset(name.to_string()));
        }
    };

    let tz = now.timezone();
    let range = DateRange {
        from: localize(&tz, start_of_day(first), Nudge::Later),
        to: localize(&tz, end_of_day(last), Nudge::Earlier),
    };
    debug!(preset = name, %first, %last, "resolved date range preset");
    Ok(range)
}

fn days_before(day: NaiveDate, days: u64) -> NaiveDate {
    day - Days::new(days)
}

fn start_of_day(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

fn end_of_day(day: NaiveDate) -> NaiveDateTime {
    start_of_day(day) + TimeDelta::days(1) - TimeDelta::milliseconds(1)
}

/// Longest run of skipped wall-clock time searched when localizing.
const MAX_GAP_MINUTES: i64 = 24 * 60;

/// Which way to move out of a DST gap.
#[derive(Debug, Clone, Copy)]
enum Nudge {
    Earlier,
    Later,
}

/// Pin a wall-clock time to `tz`. Ambiguous times take the earlier instant.
/// Times skipped by a DST change move minute by minute in the `nudge`
/// direction until they exist, so range bounds stay on their own day.
fn localize<Tz: TimeZone>(
    tz: &Tz,
    naive: NaiveDateTime,
    nudge: Nudge,
) -> DateTime<Tz> {
    let step = match nudge {
        Nudge::Earlier => TimeDelta::minutes(-1),
        Nudge::Later => TimeDelta::minutes(1),
    };

    let mut candidate = naive;
    for _ in 0..=MAX_GAP_MINUTES {
        if let Some(instant) = tz.from_local_datetime(&candidate).earliest() {
            return instant;
        }
        candidate += step;
    }
    tz.from_utc_datetime(&naive)
}
