use chrono::{DateTime, TimeZone, Utc};
use regdex_model::DateRange;

use super::types::*;
use crate::Result;

/// Fluent API for building page queries
#[derive(Debug, Clone)]
pub struct CatalogQueryBuilder {
    tags: TagFilter,
    created: DateRangeFilter,
    page: usize,
    limit: usize,
}

impl CatalogQueryBuilder {
    /// Create a new query builder for the first page
    pub fn new() -> Self {
        Self {
            tags: TagFilter::default(),
            created: DateRangeFilter::default(),
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }

    // === Filter methods ===

    /// Require a tag
    pub fn tag(mut self, tag: impl AsRef<str>) -> Self {
        self.tags.push(tag.as_ref());
        self
    }

    /// Require every tag in `tags`
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            self.tags.push(tag.as_ref());
        }
        self
    }

    /// Only items created at or after `from`
    pub fn created_from(mut self, from: DateTime<Utc>) -> Self {
        self.created.from = Some(from);
        self
    }

    /// Only items created at or before `to`
    pub fn created_to(mut self, to: DateTime<Utc>) -> Self {
        self.created.to = Some(to);
        self
    }

    pub fn created_between(
        self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Self {
        self.created_from(from).created_to(to)
    }

    /// Restrict to a resolved preset range, e.g. from
    /// [`resolve_preset`](crate::dates::resolve_preset).
    pub fn created_within<Tz: TimeZone>(self, range: &DateRange<Tz>) -> Self {
        self.created_between(
            range.from.with_timezone(&Utc),
            range.to.with_timezone(&Utc),
        )
    }

    // === Pagination methods ===

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Build the final query, validating pagination
    pub fn build(self) -> Result<PageQuery> {
        let pagination = PageRequest::new(self.page, self.limit)?;
        let created = (!self.created.is_unbounded()).then_some(self.created);
        Ok(PageQuery {
            filters: CatalogFilters {
                tags: self.tags,
                created,
            },
            pagination,
        })
    }
}

impl Default for CatalogQueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CatalogError;

    #[test]
    fn builds_defaults() {
        let query = CatalogQueryBuilder::new().build().unwrap();
        assert_eq!(query, PageQuery::default());
    }

    #[test]
    fn collects_filters_and_pagination() {
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let query = CatalogQueryBuilder::new()
            .tag("infra")
            .tags(["cli", "infra"])
            .created_from(from)
            .page(2)
            .limit(5)
            .build()
            .unwrap();

        assert_eq!(query.filters.tags.tags(), ["infra", "cli"]);
        assert_eq!(query.filters.created.unwrap().from, Some(from));
        assert_eq!(query.pagination.page(), 2);
        assert_eq!(query.pagination.limit(), 5);
    }

    #[test]
    fn zero_page_is_rejected() {
        let err = CatalogQueryBuilder::new().page(0).build().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidParameter(_)));
    }

    #[test]
    fn preset_ranges_convert_to_utc() {
        let offset = chrono::FixedOffset::east_opt(2 * 3600).unwrap();
        let range = DateRange {
            from: offset.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            to: offset.with_ymd_and_hms(2024, 1, 1, 23, 59, 59).unwrap(),
        };
        let query = CatalogQueryBuilder::new()
            .created_within(&range)
            .build()
            .unwrap();
        let created = query.filters.created.unwrap();
        assert_eq!(
            created.from,
            Some(Utc.with_ymd_and_hms(2023, 12, 31, 22, 0, 0).unwrap())
        );
    }
}
