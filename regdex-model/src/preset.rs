use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::fmt;

/// Named date-range shorthands offered by pickers.
///
/// `ThisWeek`, `LastWeek`, `ThisMonth` and `LastMonth` are reserved: they have
/// names and labels but are not part of [`PRESETS`] and do not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetName {
    Today,
    Yesterday,
    Last7,
    Last14,
    Last30,
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
}

impl PresetName {
    /// Presets that resolve to a concrete range, in picker order.
    pub fn all() -> &'static [PresetName] {
        use PresetName::*;
        &[Today, Yesterday, Last7, Last14, Last30]
    }

    pub fn reserved() -> &'static [PresetName] {
        use PresetName::*;
        &[ThisWeek, LastWeek, ThisMonth, LastMonth]
    }

    pub fn key(&self) -> &'static str {
        match self {
            PresetName::Today => "today",
            PresetName::Yesterday => "yesterday",
            PresetName::Last7 => "last7",
            PresetName::Last14 => "last14",
            PresetName::Last30 => "last30",
            PresetName::ThisWeek => "thisWeek",
            PresetName::LastWeek => "lastWeek",
            PresetName::ThisMonth => "thisMonth",
            PresetName::LastMonth => "lastMonth",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PresetName::Today => "Today",
            PresetName::Yesterday => "Yesterday",
            PresetName::Last7 => "Last 7 days",
            PresetName::Last14 => "Last 14 days",
            PresetName::Last30 => "Last 30 days",
            PresetName::ThisWeek => "This Week",
            PresetName::LastWeek => "Last Week",
            PresetName::ThisMonth => "This Month",
            PresetName::LastMonth => "Last Month",
        }
    }

    pub fn is_reserved(&self) -> bool {
        Self::reserved().contains(self)
    }

    /// Look up a preset by key, including reserved ones.
    pub fn from_key(key: &str) -> Option<PresetName> {
        Self::all()
            .iter()
            .chain(Self::reserved())
            .copied()
            .find(|preset| preset.key() == key)
    }
}

impl fmt::Display for PresetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Row of the static preset table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRangePreset {
    pub name: &'static str,
    pub label: &'static str,
}

pub const PRESETS: &[DateRangePreset] = &[
    DateRangePreset { name: "today", label: "Today" },
    DateRangePreset { name: "yesterday", label: "Yesterday" },
    DateRangePreset { name: "last7", label: "Last 7 days" },
    DateRangePreset { name: "last14", label: "Last 14 days" },
    DateRangePreset { name: "last30", label: "Last 30 days" },
];

/// Concrete, inclusive instant pair produced by resolving a preset.
#[derive(Debug, Clone, PartialEq)]
pub struct DateRange<Tz: TimeZone> {
    pub from: DateTime<Tz>,
    pub to: DateTime<Tz>,
}

impl<Tz: TimeZone> DateRange<Tz> {
    pub fn contains(&self, instant: &DateTime<Tz>) -> bool {
        &self.from <= instant && instant <= &self.to
    }
}
