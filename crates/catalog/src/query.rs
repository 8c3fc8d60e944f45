//! Catalog listing: filtering, pagination, and the category index.

use serde::Serialize;

use crate::model::Item;
use crate::store::CatalogStore;

/// Smallest accepted page number.
pub const MIN_PAGE: u32 = 1;
/// Largest accepted page size.
pub const MAX_PER_PAGE: u32 = 50;
/// Page size applied when the caller does not send one.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Out-of-range paging inputs, rejected before the engine runs.
#[derive(Debug, thiserror::Error)]
pub enum ListParamsError {
    #[error("page must be at least {MIN_PAGE}")]
    PageOutOfRange,
    #[error("per_page must be between 1 and {MAX_PER_PAGE}")]
    PerPageOutOfRange,
}

/// Validated listing parameters.
#[derive(Debug, Clone)]
pub struct ListParams {
    page: u32,
    per_page: u32,
    query: Option<String>,
    category: Option<String>,
}

impl ListParams {
    /// Build validated parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ListParamsError`] when `page` is below 1 or `per_page`
    /// falls outside `[1, 50]`.
    pub fn new(
        page: u32,
        per_page: u32,
        query: Option<String>,
        category: Option<String>,
    ) -> Result<Self, ListParamsError> {
        if page < MIN_PAGE {
            return Err(ListParamsError::PageOutOfRange);
        }
        if per_page < 1 || per_page > MAX_PER_PAGE {
            return Err(ListParamsError::PerPageOutOfRange);
        }
        Ok(Self {
            page,
            per_page,
            query,
            category,
        })
    }
}

/// One page of the filtered catalog.
#[derive(Debug, Clone, Serialize)]
pub struct ItemPage {
    pub items: Vec<Item>,
    pub total: usize,
    pub page: u32,
    pub per_page: u32,
}

/// Produce a filtered, paginated view of the catalog.
///
/// Filtering starts from the store's insertion order. A category filter
/// keeps exact (case-sensitive) matches; a query filter keeps items whose
/// title, short description, or category contains the query
/// case-insensitively. Both filters compose with AND. `total` counts the
/// filtered set before slicing, and a window past the end yields an empty
/// page rather than an error. `page` and `per_page` are echoed back
/// unchanged.
#[must_use]
pub fn list_items(store: &CatalogStore, params: &ListParams) -> ItemPage {
    let mut filtered: Vec<&Item> = store.items().iter().collect();

    if let Some(category) = params.category.as_deref() {
        filtered.retain(|item| item.category == category);
    }
    if let Some(query) = params.query.as_deref() {
        let needle = query.to_lowercase();
        filtered.retain(|item| {
            item.title.to_lowercase().contains(&needle)
                || item.short_description.to_lowercase().contains(&needle)
                || item.category.to_lowercase().contains(&needle)
        });
    }

    let total = filtered.len();
    let start = (params.page as usize - 1) * params.per_page as usize;
    let items = filtered
        .into_iter()
        .skip(start)
        .take(params.per_page as usize)
        .cloned()
        .collect();

    ItemPage {
        items,
        total,
        page: params.page,
        per_page: params.per_page,
    }
}

/// Distinct categories across the catalog, lexicographically sorted.
#[must_use]
pub fn list_categories(store: &CatalogStore) -> Vec<String> {
    let mut categories: Vec<String> = store
        .items()
        .iter()
        .map(|item| item.category.clone())
        .collect();
    categories.sort();
    categories.dedup();
    categories
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::seed::seed_items;

    fn store() -> CatalogStore {
        CatalogStore::new(seed_items()).unwrap()
    }

    fn params(
        page: u32,
        per_page: u32,
        query: Option<&str>,
        category: Option<&str>,
    ) -> ListParams {
        ListParams::new(
            page,
            per_page,
            query.map(str::to_owned),
            category.map(str::to_owned),
        )
        .unwrap()
    }

    fn ids(page: &ItemPage) -> Vec<i64> {
        page.items.iter().map(|i| i.id.as_i64()).collect()
    }

    #[test]
    fn test_unfiltered_first_page() {
        let store = store();
        let page = list_items(&store, &params(1, 10, None, None));
        assert_eq!(ids(&page), [1, 2, 3]);
        assert_eq!(page.total, 3);
        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, 10);
    }

    #[test]
    fn test_category_filter_is_exact() {
        let store = store();
        let page = list_items(&store, &params(1, 10, None, Some("Snacks")));
        assert_eq!(ids(&page), [1, 3]);
        assert_eq!(page.total, 2);

        let lowercase = list_items(&store, &params(1, 10, None, Some("snacks")));
        assert!(lowercase.items.is_empty());
        assert_eq!(lowercase.total, 0);
    }

    #[test]
    fn test_query_matches_title_case_insensitively() {
        let store = store();
        let page = list_items(&store, &params(1, 10, Some("ALPHA"), None));
        assert_eq!(ids(&page), [1]);
    }

    #[test]
    fn test_query_matches_short_description() {
        let store = store();
        let page = list_items(&store, &params(1, 10, Some("second"), None));
        assert_eq!(ids(&page), [2]);
    }

    #[test]
    fn test_query_matches_category() {
        let store = store();
        let page = list_items(&store, &params(1, 10, Some("bever"), None));
        assert_eq!(ids(&page), [2]);
    }

    #[test]
    fn test_filters_compose_with_and() {
        let store = store();
        let page = list_items(&store, &params(1, 10, Some("third"), Some("Snacks")));
        assert_eq!(ids(&page), [3]);
        assert_eq!(page.total, 1);

        let disjoint = list_items(&store, &params(1, 10, Some("alpha"), Some("Beverages")));
        assert!(disjoint.items.is_empty());
        assert_eq!(disjoint.total, 0);
    }

    #[test]
    fn test_filter_order_is_immaterial() {
        // Category-then-query and query-then-category reduce to the same
        // retained set; the engine applies category first, so checking the
        // composed result against a hand-filtered query-first pass covers
        // commutativity.
        let store = store();
        let composed = list_items(&store, &params(1, 50, Some("item"), Some("Snacks")));

        let query_first = list_items(&store, &params(1, 50, Some("item"), None));
        let expected: Vec<i64> = query_first
            .items
            .iter()
            .filter(|item| item.category == "Snacks")
            .map(|item| item.id.as_i64())
            .collect();

        assert_eq!(ids(&composed), expected);
    }

    #[test]
    fn test_second_page_of_two() {
        let store = store();
        let page = list_items(&store, &params(2, 2, None, None));
        assert_eq!(ids(&page), [3]);
        assert_eq!(page.total, 3);
        assert_eq!(page.page, 2);
        assert_eq!(page.per_page, 2);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let store = store();
        let page = list_items(&store, &params(5, 10, None, None));
        assert!(page.items.is_empty());
        assert_eq!(page.total, 3);
        assert_eq!(page.page, 5);
    }

    #[test]
    fn test_window_length_invariant() {
        let store = store();
        for page_no in 1..=4 {
            for per_page in 1..=4 {
                let page = list_items(&store, &params(page_no, per_page, None, None));
                let skipped = (page_no as usize - 1) * per_page as usize;
                let expected = (per_page as usize).min(page.total.saturating_sub(skipped));
                assert_eq!(page.items.len(), expected);
            }
        }
    }

    #[test]
    fn test_params_bounds() {
        assert!(matches!(
            ListParams::new(0, 10, None, None),
            Err(ListParamsError::PageOutOfRange)
        ));
        assert!(matches!(
            ListParams::new(1, 0, None, None),
            Err(ListParamsError::PerPageOutOfRange)
        ));
        assert!(matches!(
            ListParams::new(1, 51, None, None),
            Err(ListParamsError::PerPageOutOfRange)
        ));
        assert!(ListParams::new(1, 50, None, None).is_ok());
    }

    #[test]
    fn test_categories_sorted_and_distinct() {
        let store = store();
        assert_eq!(list_categories(&store), ["Beverages", "Snacks"]);
    }
}
