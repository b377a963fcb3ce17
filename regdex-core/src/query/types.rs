use chrono::{DateTime, Utc};
use regdex_model::parse_instant;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{CatalogError, Result};

/// Items per page when the caller does not say otherwise.
pub const DEFAULT_PAGE_LIMIT: usize = 10;

/// Main query structure for the pagination path
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageQuery {
    pub filters: CatalogFilters,
    pub pagination: PageRequest,
}

/// Catalog filtering options, combined conjunctively
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogFilters {
    pub tags: TagFilter,
    pub created: Option<DateRangeFilter>,
}

/// Validated 1-indexed page request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPageRequest")]
pub struct PageRequest {
    page: usize,
    limit: usize,
}

/// Wire shape of [`PageRequest`]; deserialization goes through
/// [`PageRequest::new`] so zero values are rejected.
#[derive(Deserialize)]
struct RawPageRequest {
    page: usize,
    limit: usize,
}

impl TryFrom<RawPageRequest> for PageRequest {
    type Error = CatalogError;

    fn try_from(raw: RawPageRequest) -> Result<Self> {
        Self::new(raw.page, raw.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl PageRequest {
    pub fn new(page: usize, limit: usize) -> Result<Self> {
        if page == 0 || limit == 0 {
            warn!(page, limit, "rejected page request");
            return Err(CatalogError::InvalidParameter(format!(
                "page and limit must be positive integers \
                 (page={page}, limit={limit})"
            )));
        }
        Ok(Self { page, limit })
    }

    /// Parse string-typed pagination input, as received from a query string.
    ///
    /// `limit` falls back to `default_limit` when absent.
    pub fn parse(
        page: &str,
        limit: Option<&str>,
        default_limit: usize,
    ) -> Result<Self> {
        let page = parse_positive("page", page)?;
        let limit = match limit {
            Some(raw) => parse_positive("limit", raw)?,
            None => default_limit,
        };
        Self::new(page, limit)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Index of the first item on this page. Saturates instead of overflowing.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }
}

fn parse_positive(name: &str, raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => {
            warn!(
                parameter = name,
                value = raw,
                "invalid pagination parameter"
            );
            Err(CatalogError::InvalidParameter(format!(
                "{name} must be a positive integer, got {raw:?}"
            )))
        }
    }
}

/// Set of tags an item must carry, all of them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagFilter {
    tags: Vec<String>,
}

impl TagFilter {
    /// Trims each tag, drops blanks and duplicates, keeps first-seen order.
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self::default();
        for tag in tags {
            filter.push(tag.as_ref());
        }
        filter
    }

    pub fn push(&mut self, tag: &str) {
        let tag = tag.trim();
        if !tag.is_empty() && !self.tags.iter().any(|t| t == tag) {
            self.tags.push(tag.to_string());
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Inclusive creation-date bounds. Either side may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRangeFilter {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl DateRangeFilter {
    pub fn new(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Self {
        Self { from, to }
    }

    /// Parse calendar-date strings. Blank strings count as absent; returns
    /// `None` when neither bound is given.
    pub fn parse(from: Option<&str>, to: Option<&str>) -> Result<Option<Self>> {
        let from = parse_bound("from", from)?;
        let to = parse_bound("to", to)?;
        if from.is_none() && to.is_none() {
            return Ok(None);
        }
        Ok(Some(Self { from, to }))
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Both bounds are inclusive: an item created exactly at `from` or `to`
    /// passes. Items without a creation date fail any bounded range.
    pub fn contains(&self, created_at: Option<DateTime<Utc>>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(created_at) = created_at else {
            return false;
        };
        let after_from = self.from.is_none_or(|from| created_at >= from);
        let before_to = self.to.is_none_or(|to| created_at <= to);
        after_from && before_to
    }
}

fn parse_bound(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<DateTime<Utc>>> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => parse_instant(value)
            .map(Some)
            .map_err(|source| CatalogError::Parse { field, source }),
        None => Ok(None),
    }
}

/// String-typed date range as it arrives from a request
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRangeParams {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
}

impl DateRangeParams {
    pub fn parse(&self) -> Result<Option<DateRangeFilter>> {
        DateRangeFilter::parse(self.from.as_deref(), self.to.as_deref())
    }
}
