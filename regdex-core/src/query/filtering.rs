//! Tag and creation-date predicates over the catalog.
//!
//! Tags are ANDed: an item passes only if it carries every requested tag.
//! The date range is inclusive on both ends. Both predicates must hold.

use regdex_model::CatalogItem;

use super::types::{CatalogFilters, DateRangeFilter, TagFilter};

impl CatalogFilters {
    pub fn new(tags: TagFilter, created: Option<DateRangeFilter>) -> Self {
        Self { tags, created }
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
            && self.created.is_none_or(|range| range.is_unbounded())
    }

    pub fn matches(&self, item: &CatalogItem) -> bool {
        matches_tags(item, &self.tags)
            && self
                .created
                .is_none_or(|range| range.contains(item.created_at))
    }

    pub fn apply<'a>(&self, items: &'a [CatalogItem]) -> Vec<&'a CatalogItem> {
        filter_items(items, &self.tags, self.created.as_ref())
    }
}

fn matches_tags(item: &CatalogItem, tags: &TagFilter) -> bool {
    tags.is_empty() || item.has_all_tags(tags.tags())
}

/// Filter `items` in order, keeping those that pass both predicates.
pub fn filter_items<'a>(
    items: &'a [CatalogItem],
    tags: &TagFilter,
    created: Option<&DateRangeFilter>,
) -> Vec<&'a CatalogItem> {
    items
        .iter()
        .filter(|item| matches_tags(item, tags))
        .filter(|item| {
            created.is_none_or(|range| range.contains(item.created_at))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn day(d: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, d, 9, 0, 0).unwrap()
    }

    fn items() -> Vec<CatalogItem> {
        vec![
            CatalogItem::new("a", "A")
                .with_tags(["infra", "cli"])
                .with_created_at(day(1)),
            CatalogItem::new("b", "B")
                .with_tags(["infra"])
                .with_created_at(day(5)),
            CatalogItem::new("c", "C")
                .with_tags(["web"])
                .with_created_at(day(10)),
            CatalogItem::new("d", "D").with_tags(["infra", "web"]),
        ]
    }

    fn slugs(items: &[&CatalogItem]) -> Vec<String> {
        items.iter().map(|i| i.slug.clone()).collect()
    }

    #[test]
    fn no_filters_pass_everything_in_order() {
        let items = items();
        let filtered = CatalogFilters::default().apply(&items);
        assert_eq!(slugs(&filtered), ["a", "b", "c", "d"]);
        assert!(CatalogFilters::default().is_empty());
    }

    #[test]
    fn tags_are_anded() {
        let items = items();
        let one = filter_items(&items, &TagFilter::new(["infra"]), None);
        assert_eq!(slugs(&one), ["a", "b", "d"]);

        let two = filter_items(&items, &TagFilter::new(["infra", "cli"]), None);
        assert_eq!(slugs(&two), ["a"]);
        assert!(two.len() <= one.len());
    }

    #[test]
    fn date_bounds_combine_with_tags() {
        let items = items();
        let range = DateRangeFilter::new(Some(day(5)), Some(day(10)));
        let filtered =
            filter_items(&items, &TagFilter::default(), Some(&range));
        assert_eq!(slugs(&filtered), ["b", "c"]);

        let both = CatalogFilters::new(TagFilter::new(["infra"]), Some(range));
        assert_eq!(slugs(&both.apply(&items)), ["b"]);
        assert!(both.matches(&items[1]));
        assert!(!both.matches(&items[3]));
    }

    #[test]
    fn open_ended_ranges() {
        let items = items();
        let from_only = DateRangeFilter::new(Some(day(5)), None);
        let filtered =
            filter_items(&items, &TagFilter::default(), Some(&from_only));
        assert_eq!(slugs(&filtered), ["b", "c"]);

        let to_only = DateRangeFilter::new(None, Some(day(5)));
        assert_eq!(
            slugs(&filter_items(&items, &TagFilter::default(), Some(&to_only))),
            ["a", "b"]
        );
    }
}
