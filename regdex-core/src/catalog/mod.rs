//! The catalog store and its query surface.
//!
//! A [`Catalog`] is built once from a static list of items and is read-only
//! afterwards. Building validates slug uniqueness and precomputes the search
//! index, so every query after that is a pure read. A single process-wide
//! instance can be installed with [`install`] and fetched with [`global`].

pub mod loader;

use std::collections::{HashMap, HashSet};
use std::path::Path;

use once_cell::sync::OnceCell;
use rand::Rng;
use regdex_model::{CatalogItem, PageResult};
use tracing::{debug, info};

use crate::config::CatalogConfig;
use crate::query::{
    CatalogFilters, DateRangeParams, PageQuery, PageRequest, TagFilter,
    paginate,
};
use crate::recommend::{self, Recommendation};
use crate::search::{SearchHit, SearchIndex};
use crate::{CatalogError, Result};

static GLOBAL: OnceCell<Catalog> = OnceCell::new();

/// Install the process-wide catalog. Fails if one is already installed.
pub fn install(catalog: Catalog) -> Result<&'static Catalog> {
    GLOBAL
        .try_insert(catalog)
        .map_err(|_| CatalogError::AlreadyInitialized)
}

/// The process-wide catalog, if [`install`] has run.
pub fn global() -> Option<&'static Catalog> {
    GLOBAL.get()
}

#[derive(Debug)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    slugs: HashMap<String, usize>,
    search: SearchIndex,
    config: CatalogConfig,
}

impl Catalog {
    pub fn from_items(
        items: Vec<CatalogItem>,
        config: CatalogConfig,
    ) -> Result<Self> {
        config.validate()?;

        let mut slugs = HashMap::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            item.validate().map_err(CatalogError::InvalidItem)?;
            if slugs.insert(item.slug.clone(), index).is_some() {
                return Err(CatalogError::DuplicateSlug(item.slug.clone()));
            }
        }

        let search = SearchIndex::build(&items, &config.search)?;
        let catalog = Self {
            items,
            slugs,
            search,
            config,
        };

        info!(
            items = catalog.items.len(),
            tags = catalog.all_tags().len(),
            "catalog built"
        );
        Ok(catalog)
    }

    /// Load items from `path` and build a catalog with `config`.
    pub fn from_path(path: &Path, config: CatalogConfig) -> Result<Self> {
        let items = loader::load_from_file(path)?;
        Self::from_items(items, config)
    }

    /// Build from the data file named by `config.catalog_path`.
    pub fn load(config: CatalogConfig) -> Result<Self> {
        let path = config.catalog_path.clone().ok_or_else(|| {
            CatalogError::InvalidParameter(
                "no catalog_path configured".to_string(),
            )
        })?;
        Self::from_path(&path, config)
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Every item, in catalog order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get_item(&self, slug: &str) -> Option<&CatalogItem> {
        self.slugs.get(slug).map(|&index| &self.items[index])
    }

    pub fn require_item(&self, slug: &str) -> Result<&CatalogItem> {
        self.get_item(slug)
            .ok_or_else(|| CatalogError::NotFound(slug.to_string()))
    }

    pub fn position(&self, slug: &str) -> Option<usize> {
        self.slugs.get(slug).copied()
    }

    /// The last `n` items, newest first.
    pub fn recent(&self, n: usize) -> Vec<&CatalogItem> {
        self.items.iter().rev().take(n).collect()
    }

    pub fn recently_added(&self) -> Vec<&CatalogItem> {
        self.recent(self.config.recent_count)
    }

    /// Distinct tags in the order they first appear.
    pub fn all_tags(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .flat_map(|item| item.tags.iter())
            .map(String::as_str)
            .filter(|tag| seen.insert(*tag))
            .collect()
    }

    pub fn filter(&self, filters: &CatalogFilters) -> Vec<&CatalogItem> {
        filters.apply(&self.items)
    }

    /// Filter, then slice out the requested page.
    pub fn page(&self, query: &PageQuery) -> PageResult<&CatalogItem> {
        let filtered = self.filter(&query.filters);
        let result = paginate(&filtered, query.pagination);
        debug!(
            page = result.current_page,
            limit = result.items_per_page,
            tags = ?query.filters.tags.tags(),
            total = result.total_items,
            "catalog page"
        );
        result
    }

    /// String-typed page lookup, as driven by URL query parameters.
    ///
    /// Pagination is validated before anything else; a malformed date bound
    /// fails the whole request rather than being ignored.
    pub fn get_page<S: AsRef<str>>(
        &self,
        page: &str,
        limit: Option<&str>,
        tags: &[S],
        date_range: Option<&DateRangeParams>,
    ) -> Result<PageResult<&CatalogItem>> {
        let pagination =
            PageRequest::parse(page, limit, self.config.default_page_limit)?;
        let created = match date_range {
            Some(params) => params.parse()?,
            None => None,
        };

        let query = PageQuery {
            filters: CatalogFilters::new(TagFilter::new(tags), created),
            pagination,
        };
        Ok(self.page(&query))
    }

    /// Fuzzy search; see [`crate::search`] for the query syntax.
    pub fn search(&self, keyword: &str) -> Vec<SearchHit<'_>> {
        self.search.search(&self.items, keyword)
    }

    pub fn recommend(&self, count: usize) -> Result<Vec<Recommendation<'_>>> {
        recommend::recommend(&self.items, count)
    }

    /// Draw the configured number of recommendations.
    pub fn recommended(&self) -> Result<Vec<Recommendation<'_>>> {
        self.recommend(self.config.recommend_count)
    }

    pub fn recommend_with_rng<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Recommendation<'_>>> {
        recommend::recommend_with_rng(&self.items, count, rng)
    }
}
