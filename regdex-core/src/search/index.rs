use std::collections::HashSet;

use regdex_model::CatalogItem;
use tracing::debug;

use super::extended::{self, ParsedQuery, Term};
use super::ranking;
use super::{SearchConfig, SearchField, SearchHit};
use crate::{CatalogError, Result};

#[derive(Debug, Clone)]
struct IndexedField {
    field: SearchField,
    text: String,
    lower: String,
}

#[derive(Debug, Clone, Default)]
struct IndexedEntry {
    fields: Vec<IndexedField>,
}

/// Precomputed, lowercased field values for every catalog item.
///
/// Entry `i` corresponds to catalog item `i`; the index is only valid
/// against the item slice it was built from.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    entries: Vec<IndexedEntry>,
    config: SearchConfig,
}

impl SearchIndex {
    pub fn build(items: &[CatalogItem], config: &SearchConfig) -> Result<Self> {
        let fields = normalized_fields(config)?;
        if config.max_results == Some(0) {
            return Err(CatalogError::InvalidSearchConfig(
                "max_results must be at least 1 when set".to_string(),
            ));
        }

        let entries = items
            .iter()
            .map(|item| index_item(item, &fields))
            .collect();

        Ok(Self {
            entries,
            config: SearchConfig {
                fields,
                max_results: config.max_results,
            },
        })
    }

    /// Rank `items` against `keyword`, best match first.
    ///
    /// Ties fall back to the shorter title, then catalog order.
    pub fn search<'a>(
        &self,
        items: &'a [CatalogItem],
        keyword: &str,
    ) -> Vec<SearchHit<'a>> {
        debug_assert_eq!(items.len(), self.entries.len());

        let query = extended::parse(keyword);
        if query.is_empty() {
            return Vec::new();
        }

        let matcher = ranking::matcher();
        let mut hits: Vec<SearchHit<'a>> = self
            .entries
            .iter()
            .zip(items)
            .enumerate()
            .filter_map(|(ref_index, (entry, item))| {
                let score = score_entry(&matcher, entry, &query)?;
                Some(SearchHit {
                    item,
                    ref_index,
                    score,
                })
            })
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.item.title.len().cmp(&b.item.title.len()))
                .then_with(|| a.ref_index.cmp(&b.ref_index))
        });

        if let Some(limit) = self.config.max_results {
            hits.truncate(limit);
        }

        debug!(keyword, hits = hits.len(), "catalog search");
        hits
    }
}

fn normalized_fields(config: &SearchConfig) -> Result<Vec<SearchField>> {
    let mut seen = HashSet::new();
    let fields: Vec<SearchField> = config
        .fields
        .iter()
        .copied()
        .filter(|field| seen.insert(*field))
        .collect();

    if fields.is_empty() {
        return Err(CatalogError::InvalidSearchConfig(
            "at least one search field is required".to_string(),
        ));
    }
    Ok(fields)
}

fn index_item(item: &CatalogItem, fields: &[SearchField]) -> IndexedEntry {
    let mut entry = IndexedEntry::default();
    for field in fields {
        let values: Vec<&str> = match field {
            SearchField::Title => vec![item.title.as_str()],
            SearchField::Authors => item.author_names().collect(),
            SearchField::Description => vec![item.search_description.as_str()],
            SearchField::Tags => item.tags.iter().map(String::as_str).collect(),
        };
        entry.fields.extend(
            values
                .into_iter()
                .filter(|value| !value.trim().is_empty())
                .map(|value| IndexedField {
                    field: *field,
                    text: value.to_string(),
                    lower: value.to_lowercase(),
                }),
        );
    }
    entry
}

fn score_entry(
    matcher: &fuzzy_matcher::skim::SkimMatcherV2,
    entry: &IndexedEntry,
    query: &ParsedQuery,
) -> Option<i64> {
    query
        .groups
        .iter()
        .filter_map(|group| score_group(matcher, entry, group))
        .max()
}

fn score_group(
    matcher: &fuzzy_matcher::skim::SkimMatcherV2,
    entry: &IndexedEntry,
    group: &[Term],
) -> Option<i64> {
    let mut total = 0_i64;
    for term in group {
        if term.kind.is_inverse() {
            if entry
                .fields
                .iter()
                .any(|field| term.matches_literal(&field.lower))
            {
                return None;
            }
            continue;
        }

        let best = entry
            .fields
            .iter()
            .filter_map(|field| {
                ranking::score_term(matcher, term, &field.text, &field.lower)
                    .map(|score| score.saturating_mul(field.field.weight()))
            })
            .max()?;
        total = total.saturating_add(best);
    }
    Some(total)
}
