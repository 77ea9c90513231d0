// Chunk: docs/chunks/prefix_filter - Case-insensitive prefix filtering
//!
//! Pure filtering of a catalog against a query.
//!
//! Matching is a case-insensitive prefix test on the item name. Results keep
//! catalog order and are truncated to `max_results` when it is non-zero.
//! A query shorter than `min_characters` yields no results at all; renderers
//! use that to show a "type more" hint (see [`is_query_too_short`]).

use unicode_segmentation::UnicodeSegmentation;

use crate::item::{Item, ItemCatalog};

/// Returns the query length in user-perceived characters (grapheme clusters).
pub fn query_length(query: &str) -> usize {
    query.graphemes(true).count()
}

/// Returns true if the query is too short to trigger filtering.
pub fn is_query_too_short(query: &str, min_characters: usize) -> bool {
    query_length(query) < min_characters
}

/// Returns the catalog positions of the items matching `query`.
///
/// This is the index form of [`filter_items`]; the engine stores positions
/// so the filtered list never outlives or copies the catalog.
pub fn filter_positions<P>(
    catalog: &ItemCatalog<P>,
    query: &str,
    min_characters: usize,
    max_results: usize,
) -> Vec<usize> {
    if is_query_too_short(query, min_characters) {
        return Vec::new();
    }

    let limit = if max_results == 0 { usize::MAX } else { max_results };
    let query_lower = query.to_lowercase();

    catalog
        .iter()
        .enumerate()
        .filter(|(_, item)| item.name().to_lowercase().starts_with(&query_lower))
        .map(|(position, _)| position)
        .take(limit)
        .collect()
}

/// Filters `catalog` by case-insensitive name prefix.
///
/// - Returns an empty list when `query` is shorter than `min_characters`.
/// - An empty query (with `min_characters == 0`) matches every item.
/// - Keeps at most `max_results` matches; `0` means unbounded.
pub fn filter_items<'a, P>(
    catalog: &'a ItemCatalog<P>,
    query: &str,
    min_characters: usize,
    max_results: usize,
) -> Vec<&'a Item<P>> {
    let items = catalog.items();
    filter_positions(catalog, query, min_characters, max_results)
        .into_iter()
        .map(|position| &items[position])
        .collect()
}
