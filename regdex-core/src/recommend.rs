//! Random "you might also like" sampling.

use rand::Rng;
use regdex_model::CatalogItem;
use serde::Serialize;
use tracing::debug;

use crate::{CatalogError, Result};

/// Recommendations drawn when the caller does not ask for a count.
pub const DEFAULT_RECOMMEND_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation<'a> {
    pub item: &'a CatalogItem,
    /// Position of `item` in the catalog.
    pub index: usize,
}

/// Draw `count` distinct items uniformly at random using the thread RNG.
pub fn recommend(
    items: &[CatalogItem],
    count: usize,
) -> Result<Vec<Recommendation<'_>>> {
    recommend_with_rng(items, count, &mut rand::rng())
}

/// Draw `count` items without replacement by catalog index.
///
/// Fails with [`CatalogError::InsufficientItems`] when the catalog holds fewer
/// than `count` items.
pub fn recommend_with_rng<'a, R: Rng + ?Sized>(
    items: &'a [CatalogItem],
    count: usize,
    rng: &mut R,
) -> Result<Vec<Recommendation<'a>>> {
    if count > items.len() {
        return Err(CatalogError::InsufficientItems {
            requested: count,
            available: items.len(),
        });
    }

    let picks: Vec<Recommendation<'a>> =
        rand::seq::index::sample(rng, items.len(), count)
            .into_iter()
            .map(|index| Recommendation {
                item: &items[index],
                index,
            })
            .collect();

    debug!(
        requested = count,
        available = items.len(),
        "sampled recommendations"
    );
    Ok(picks)
}
