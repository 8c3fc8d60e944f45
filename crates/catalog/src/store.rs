//! In-memory catalog store.

use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock};

use kiosk_core::ItemId;

use crate::model::{Item, Submission};

/// Errors surfaced by catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// No item carries the requested id.
    #[error("item {0} not found")]
    ItemNotFound(ItemId),
}

/// Two items shared an id in the catalog list handed to [`CatalogStore::new`].
#[derive(Debug, thiserror::Error)]
#[error("duplicate item id {id} in catalog")]
pub struct DuplicateItemId {
    pub id: ItemId,
}

/// Owns the canonical item list and the per-item submission log.
///
/// The item list is immutable after construction and safe to read from any
/// number of threads without locking. Only the submission log mutates, and
/// it sits behind an `RwLock` so appends are serialized against each other
/// and against readers of the same bucket.
pub struct CatalogStore {
    items: Vec<Item>,
    submissions: RwLock<HashMap<ItemId, Vec<Submission>>>,
}

impl CatalogStore {
    /// Build a store over a catalog list.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateItemId`] when two items share an id.
    pub fn new(items: Vec<Item>) -> Result<Self, DuplicateItemId> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id) {
                return Err(DuplicateItemId { id: item.id });
            }
        }
        Ok(Self {
            items,
            submissions: RwLock::new(HashMap::new()),
        })
    }

    /// All items in catalog (insertion) order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Look up one item by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ItemNotFound`] when no item has the id.
    pub fn get(&self, id: ItemId) -> Result<&Item, CatalogError> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or(CatalogError::ItemNotFound(id))
    }

    /// Append a submission to the item's bucket and return the new bucket
    /// size.
    ///
    /// The bucket is created on the first submission for that id. Only the
    /// submission log is touched; the item list never changes.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ItemNotFound`] when the id does not resolve.
    pub fn record_submission(
        &self,
        id: ItemId,
        submission: Submission,
    ) -> Result<usize, CatalogError> {
        self.get(id)?;
        let mut log = self
            .submissions
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let bucket = log.entry(id).or_default();
        bucket.push(submission);
        Ok(bucket.len())
    }

    /// Number of submissions recorded against an item so far.
    #[must_use]
    pub fn submission_count(&self, id: ItemId) -> usize {
        self.submissions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .map_or(0, Vec::len)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use kiosk_core::Email;

    use super::*;
    use crate::seed::seed_items;

    fn submission(name: &str) -> Submission {
        Submission {
            name: name.to_owned(),
            email: Email::parse("visitor@example.com").unwrap(),
            message: "hello".to_owned(),
        }
    }

    #[test]
    fn test_get_by_id() {
        let store = CatalogStore::new(seed_items()).unwrap();
        let item = store.get(ItemId::new(2)).unwrap();
        assert_eq!(item.title, "Beta");
    }

    #[test]
    fn test_get_unknown_id() {
        let store = CatalogStore::new(seed_items()).unwrap();
        assert!(matches!(
            store.get(ItemId::new(99)),
            Err(CatalogError::ItemNotFound(id)) if id == ItemId::new(99)
        ));
    }

    #[test]
    fn test_items_keep_insertion_order() {
        let store = CatalogStore::new(seed_items()).unwrap();
        let titles: Vec<&str> = store.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut items = seed_items();
        items.push(items.first().unwrap().clone());
        let result = CatalogStore::new(items);
        assert!(matches!(result, Err(DuplicateItemId { id }) if id == ItemId::new(1)));
    }

    #[test]
    fn test_record_submission_counts_grow_by_one() {
        let store = CatalogStore::new(seed_items()).unwrap();
        let id = ItemId::new(1);
        assert_eq!(store.submission_count(id), 0);
        assert_eq!(store.record_submission(id, submission("a")).unwrap(), 1);
        assert_eq!(store.record_submission(id, submission("b")).unwrap(), 2);
        assert_eq!(store.record_submission(id, submission("c")).unwrap(), 3);
        assert_eq!(store.submission_count(id), 3);
    }

    #[test]
    fn test_submission_buckets_are_per_item() {
        let store = CatalogStore::new(seed_items()).unwrap();
        store
            .record_submission(ItemId::new(1), submission("a"))
            .unwrap();
        assert_eq!(
            store
                .record_submission(ItemId::new(3), submission("b"))
                .unwrap(),
            1
        );
    }

    #[test]
    fn test_record_submission_unknown_item() {
        let store = CatalogStore::new(seed_items()).unwrap();
        let result = store.record_submission(ItemId::new(42), submission("a"));
        assert!(matches!(result, Err(CatalogError::ItemNotFound(_))));
        assert_eq!(store.submission_count(ItemId::new(42)), 0);
    }
}
