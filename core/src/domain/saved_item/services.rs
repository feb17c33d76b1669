use std::cmp::Reverse;

use tracing::{debug, error, info, warn};

use crate::domain::{
    common::{DEFAULT_SAVED_ITEMS_KEY, entities::app_errors::CoreError},
    saved_item::{
        entities::SavedItem,
        ports::KeyValueStorage,
        value_objects::{SaveItemInput, SaveOutcome, SavedItemFilter},
    },
};

/// Saved recipes and preservation plans, persisted as one JSON array under a
/// single storage key.
///
/// Reads never fail: a missing key or an unreadable value loads as an empty
/// collection. Titles act as the identity for lookups and deletes and are not
/// unique, so `remove` drops every item sharing the title.
pub struct SavedItemsStore<S>
where
    S: KeyValueStorage,
{
    storage: S,
    key: String,
}

impl<S> SavedItemsStore<S>
where
    S: KeyValueStorage,
{
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn with_default_key(storage: S) -> Self {
        Self::new(storage, DEFAULT_SAVED_ITEMS_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Items in stored order. A missing, unreadable or unparsable value
    /// loads as an empty collection.
    pub fn load(&self) -> Vec<SavedItem> {
        self.try_load().unwrap_or_else(|e| {
            warn!(key = %self.key, "Could not load saved items: {}", e);
            Vec::new()
        })
    }

    /// Like `load`, but fails instead of treating an unreadable value as
    /// empty. Writers start from this so they never overwrite data they could
    /// not read.
    fn try_load(&self) -> Result<Vec<SavedItem>, CoreError> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            return Ok(Vec::new());
        };

        serde_json::from_str::<Vec<SavedItem>>(&raw).map_err(|e| {
            error!(key = %self.key, "Failed to parse saved items: {}", e);
            CoreError::PersistenceError(format!("Failed to parse saved items: {}", e))
        })
    }

    fn persist(&self, items: &[SavedItem]) -> Result<(), CoreError> {
        let raw = serde_json::to_string(items).map_err(|e| {
            error!("Failed to serialize saved items: {}", e);
            CoreError::PersistenceError(format!("Failed to serialize saved items: {}", e))
        })?;

        self.storage.set_item(&self.key, &raw)
    }

    pub fn append(&self, input: SaveItemInput) -> Result<SaveOutcome, CoreError> {
        let item = SavedItem::new(input.content, input.item_type);
        let mut items = self.try_load()?;

        if items
            .iter()
            .any(|existing| existing.is_same_as(&item.title, &item.content))
        {
            debug!(title = %item.title, "Item already saved");
            return Ok(SaveOutcome {
                saved: false,
                title: item.title,
            });
        }

        let title = item.title.clone();
        items.push(item);
        self.persist(&items)?;

        info!(title = %title, count = items.len(), "Saved item");

        Ok(SaveOutcome { saved: true, title })
    }

    /// Matching items, newest first.
    pub fn list(&self, filter: &SavedItemFilter) -> Vec<SavedItem> {
        let needle = filter
            .search
            .as_deref()
            .map(|s| s.to_lowercase())
            .unwrap_or_default();

        let mut items: Vec<SavedItem> = self
            .load()
            .into_iter()
            .filter(|item| {
                filter
                    .item_type
                    .is_none_or(|item_type| item.effective_type() == Some(item_type))
            })
            .filter(|item| item.matches_search(&needle))
            .collect();

        sort_newest_first(&mut items);
        items
    }

    /// Newest item carrying `title`.
    pub fn get(&self, title: &str) -> Option<SavedItem> {
        let mut items: Vec<SavedItem> = self
            .load()
            .into_iter()
            .filter(|item| item.title == title)
            .collect();

        sort_newest_first(&mut items);
        items.into_iter().next()
    }

    /// Deletes every item titled `title` and returns what remains, newest first.
    pub fn remove(&self, title: &str) -> Result<Vec<SavedItem>, CoreError> {
        let items = self.try_load()?;
        let before = items.len();

        let mut remaining: Vec<SavedItem> =
            items.into_iter().filter(|item| item.title != title).collect();

        self.persist(&remaining)?;

        info!(
            title = %title,
            removed = before - remaining.len(),
            "Removed saved items"
        );

        sort_newest_first(&mut remaining);
        Ok(remaining)
    }
}

/// Timestamps only keep millisecond precision once persisted, so ties fall
/// back to reverse stored order (later appends are newer). Items whose
/// `savedAt` does not parse sort last.
fn sort_newest_first(items: &mut [SavedItem]) {
    items.reverse();
    items.sort_by_key(|item| Reverse(item.saved_timestamp()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::saved_item::{entities::SavedItemType, ports::MockKeyValueStorage};
    use crate::infrastructure::storage::memory_storage::InMemoryKeyValueStorage;

    fn store() -> SavedItemsStore<InMemoryKeyValueStorage> {
        SavedItemsStore::with_default_key(InMemoryKeyValueStorage::new())
    }

    fn seeded_store() -> SavedItemsStore<InMemoryKeyValueStorage> {
        let storage = InMemoryKeyValueStorage::new();
        storage
            .set_item(
                DEFAULT_SAVED_ITEMS_KEY,
                &serde_json::json!([
                    {
                        "title": "Broccoli Soup",
                        "content": "## Broccoli Soup\n* broccoli",
                        "savedAt": "2024-01-01T10:00:00.000Z",
                        "type": "recipe"
                    },
                    {
                        "title": "Preserving Greens",
                        "content": "## Preserving Greens\n1. Blanch the BROCCOLI",
                        "savedAt": "2024-03-01T10:00:00.000Z",
                        "type": "preservation"
                    },
                    {
                        "title": "Tofu Bowl",
                        "content": "## Tofu Bowl",
                        "savedAt": "2024-02-01T10:00:00.000Z"
                    }
                ])
                .to_string(),
            )
            .unwrap();
        SavedItemsStore::with_default_key(storage)
    }

    fn recipe(content: &str) -> SaveItemInput {
        SaveItemInput {
            content: content.to_string(),
            item_type: SavedItemType::Recipe,
        }
    }

    #[test]
    fn test_load_missing_key_is_empty() {
        assert!(store().load().is_empty());
    }

    #[test]
    fn test_load_corrupt_value_is_empty() {
        let storage = InMemoryKeyValueStorage::new();
        storage
            .set_item(DEFAULT_SAVED_ITEMS_KEY, "{not json")
            .unwrap();
        let store = SavedItemsStore::with_default_key(storage);

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_storage_error_is_empty() {
        let mut storage = MockKeyValueStorage::new();
        storage
            .expect_get_item()
            .returning(|_| Err(CoreError::PersistenceError("disk gone".to_string())));
        let store = SavedItemsStore::with_default_key(storage);

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_append_then_load_contains_item_once() {
        let store = store();

        let outcome = store.append(recipe("## Lemon Rice\nrice, lemon")).unwrap();
        assert_eq!(
            outcome,
            SaveOutcome {
                saved: true,
                title: "Lemon Rice".to_string()
            }
        );

        let items = store.load();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Lemon Rice");
        assert_eq!(items[0].item_type, Some(SavedItemType::Recipe));
    }

    #[test]
    fn test_append_duplicate_is_noop() {
        let store = store();

        assert!(store.append(recipe("## Lemon Rice")).unwrap().saved);
        let second = store.append(recipe("## Lemon Rice")).unwrap();

        assert!(!second.saved);
        assert_eq!(second.title, "Lemon Rice");
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_append_same_title_different_content_is_saved() {
        let store = store();

        assert!(store.append(recipe("## Lemon Rice\nv1")).unwrap().saved);
        assert!(store.append(recipe("## Lemon Rice\nv2")).unwrap().saved);

        assert_eq!(store.load().len(), 2);
    }

    #[test]
    fn test_append_write_failure_is_reported() {
        let mut storage = MockKeyValueStorage::new();
        storage.expect_get_item().returning(|_| Ok(None));
        storage
            .expect_set_item()
            .times(1)
            .returning(|_, _| Err(CoreError::PersistenceError("read-only".to_string())));
        let store = SavedItemsStore::with_default_key(storage);

        let result = store.append(recipe("## Lemon Rice"));

        assert!(matches!(result, Err(CoreError::PersistenceError(_))));
    }

    #[test]
    fn test_append_over_corrupt_value_writes_nothing() {
        let storage = InMemoryKeyValueStorage::new();
        storage
            .set_item(DEFAULT_SAVED_ITEMS_KEY, "{not json")
            .unwrap();
        let store = SavedItemsStore::with_default_key(storage);

        let result = store.append(recipe("## New"));

        assert!(matches!(result, Err(CoreError::PersistenceError(_))));
        assert_eq!(
            store.storage.get_item(DEFAULT_SAVED_ITEMS_KEY).unwrap(),
            Some("{not json".to_string())
        );
    }

    #[test]
    fn test_remove_over_corrupt_value_writes_nothing() {
        let storage = InMemoryKeyValueStorage::new();
        storage.set_item(DEFAULT_SAVED_ITEMS_KEY, "null").unwrap();
        let store = SavedItemsStore::with_default_key(storage);

        let result = store.remove("Anything");

        assert!(matches!(result, Err(CoreError::PersistenceError(_))));
        assert_eq!(
            store.storage.get_item(DEFAULT_SAVED_ITEMS_KEY).unwrap(),
            Some("null".to_string())
        );
    }

    #[test]
    fn test_append_after_read_failure_writes_nothing() {
        let mut storage = MockKeyValueStorage::new();
        storage
            .expect_get_item()
            .returning(|_| Err(CoreError::PersistenceError("disk gone".to_string())));
        storage.expect_set_item().times(0);
        let store = SavedItemsStore::with_default_key(storage);

        let result = store.append(recipe("## New"));

        assert!(matches!(result, Err(CoreError::PersistenceError(_))));
    }

    #[test]
    fn test_append_keeps_unusual_records() {
        let legacy = serde_json::json!([
            {"title": "Soup", "content": "## Soup", "savedAt": "2024-01-01T10:00:00.000Z"},
            {"title": "Legacy", "content": "## Legacy", "savedAt": "Mon Jan 01 2024", "type": "dessert"}
        ]);
        let storage = InMemoryKeyValueStorage::new();
        storage
            .set_item(DEFAULT_SAVED_ITEMS_KEY, &legacy.to_string())
            .unwrap();
        let store = SavedItemsStore::with_default_key(storage);

        assert_eq!(store.load().len(), 2);
        assert!(store.append(recipe("## New")).unwrap().saved);

        let raw = store.storage.get_item(DEFAULT_SAVED_ITEMS_KEY).unwrap().unwrap();
        let stored: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored.len(), 3);
        assert_eq!(stored[0], legacy[0]);
        assert_eq!(stored[1], legacy[1]);
        assert_eq!(stored[2]["title"], "New");
    }

    #[test]
    fn test_list_sorts_unparsable_timestamps_last() {
        let storage = InMemoryKeyValueStorage::new();
        storage
            .set_item(
                DEFAULT_SAVED_ITEMS_KEY,
                &serde_json::json!([
                    {"title": "Legacy", "content": "a", "savedAt": "Mon Jan 01 2024"},
                    {"title": "Dated", "content": "b", "savedAt": "2023-01-01T10:00:00.000Z"},
                    {"title": "Odd", "content": "c", "savedAt": "2024-01-01T10:00:00.000Z", "type": "dessert"}
                ])
                .to_string(),
            )
            .unwrap();
        let store = SavedItemsStore::with_default_key(storage);

        let titles: Vec<String> = store
            .list(&SavedItemFilter::default())
            .into_iter()
            .map(|item| item.title)
            .collect();
        assert_eq!(titles, vec!["Odd", "Dated", "Legacy"]);

        let recipes = store.list(&SavedItemFilter {
            search: None,
            item_type: Some(SavedItemType::Recipe),
        });
        assert_eq!(recipes.len(), 2);
        assert!(recipes.iter().all(|item| item.title != "Odd"));
    }

    #[test]
    fn test_list_is_newest_first() {
        let titles: Vec<String> = seeded_store()
            .list(&SavedItemFilter::default())
            .into_iter()
            .map(|item| item.title)
            .collect();

        assert_eq!(titles, vec!["Preserving Greens", "Tofu Bowl", "Broccoli Soup"]);
    }

    #[test]
    fn test_list_breaks_timestamp_ties_by_stored_order() {
        let storage = InMemoryKeyValueStorage::new();
        storage
            .set_item(
                DEFAULT_SAVED_ITEMS_KEY,
                &serde_json::json!([
                    {"title": "First", "content": "a", "savedAt": "2024-01-01T10:00:00.000Z"},
                    {"title": "Second", "content": "b", "savedAt": "2024-01-01T10:00:00.000Z"}
                ])
                .to_string(),
            )
            .unwrap();

        let titles: Vec<String> = SavedItemsStore::with_default_key(storage)
            .list(&SavedItemFilter::default())
            .into_iter()
            .map(|item| item.title)
            .collect();

        assert_eq!(titles, vec!["Second", "First"]);
    }

    #[test]
    fn test_list_search_is_case_insensitive() {
        let titles: Vec<String> = seeded_store()
            .list(&SavedItemFilter::search("broccoli"))
            .into_iter()
            .map(|item| item.title)
            .collect();

        assert_eq!(titles, vec!["Preserving Greens", "Broccoli Soup"]);
    }

    #[test]
    fn test_list_empty_search_returns_all() {
        assert_eq!(seeded_store().list(&SavedItemFilter::search("")).len(), 3);
    }

    #[test]
    fn test_list_by_type_treats_untyped_as_recipe() {
        let titles: Vec<String> = seeded_store()
            .list(&SavedItemFilter {
                search: None,
                item_type: Some(SavedItemType::Recipe),
            })
            .into_iter()
            .map(|item| item.title)
            .collect();

        assert_eq!(titles, vec!["Tofu Bowl", "Broccoli Soup"]);
    }

    #[test]
    fn test_remove_deletes_every_item_with_title() {
        let store = store();
        store.append(recipe("## X\nfirst")).unwrap();
        store.append(recipe("## X\nsecond")).unwrap();
        store.append(recipe("## Y")).unwrap();

        let remaining = store.remove("X").unwrap();

        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].title, "Y");
        assert!(store.load().iter().all(|item| item.title != "X"));
    }

    #[test]
    fn test_remove_absent_title_keeps_items() {
        let remaining = seeded_store().remove("Nothing").unwrap();
        assert_eq!(remaining.len(), 3);
    }

    #[test]
    fn test_get_returns_item_by_title() {
        let store = seeded_store();

        assert_eq!(store.get("Tofu Bowl").unwrap().content, "## Tofu Bowl");
        assert!(store.get("Missing").is_none());
    }

    #[test]
    fn test_custom_key_is_isolated() {
        let storage = InMemoryKeyValueStorage::new();
        let store = SavedItemsStore::new(storage, "otherKey");
        store.append(recipe("## Lemon Rice")).unwrap();

        assert_eq!(store.key(), "otherKey");
        assert_eq!(store.load().len(), 1);
    }
}
