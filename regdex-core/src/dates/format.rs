use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use regdex_model::parse_instant;

use crate::{CatalogError, Result};

/// Format as a long US-English date, e.g. `"October 19, 2026"`.
pub fn format_long_date<Tz>(date: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    date.format("%B %-d, %Y").to_string()
}

/// Parse a date string and format it with [`format_long_date`] (in UTC).
pub fn format_long_date_str(input: &str) -> Result<String> {
    let instant = parse_instant(input)
        .map_err(|source| CatalogError::Parse { field: "date", source })?;
    Ok(format_long_date(&instant))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn long_date_has_no_padding() {
        let date = Utc.with_ymd_and_hms(2026, 3, 7, 10, 0, 0).unwrap();
        assert_eq!(format_long_date(&date), "March 7, 2026");
    }

    #[test]
    fn formats_strings() {
        assert_eq!(
            format_long_date_str("2026-10-19").unwrap(),
            "October 19, 2026"
        );
        assert!(matches!(
            format_long_date_str("19/10/2026"),
            Err(CatalogError::Parse { field: "date", .. })
        ));
    }
}
