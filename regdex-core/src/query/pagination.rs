use regdex_model::PageResult;

use super::types::PageRequest;

/// Slice one page out of `items` and compute pager metadata.
///
/// A page past the end yields empty `data`; it is not an error.
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> PageResult<T> {
    let total_items = items.len();
    let start = request.offset().min(total_items);
    let end = start.saturating_add(request.limit()).min(total_items);

    PageResult {
        data: items[start..end].to_vec(),
        current_page: request.page(),
        total_pages: total_items.div_ceil(request.limit()),
        total_items,
        items_per_page: request.limit(),
    }
}
