//! The authoritative in-memory store.
//!
//! [`CategoryStore`] owns the full ordered collection of categories plus at
//! most one selection, held by category id. Every operation is synchronous
//! and runs to completion; each one either fully applies or returns a
//! [`Rejection`] leaving the store untouched. Durability is the caller's
//! concern: mutate here first, then hand the serialized state to a
//! [`crate::persist::SnapshotStore`].
//!
//! Item mutations are addressed by **storage index**, the item's position in
//! the owning category's insertion order. Filtered or sorted views produced
//! by [`crate::search`] are display-only and never shift storage indexes.

use crate::env::{Clock, IdGen, SystemClock, UuidGen};
use crate::error::Rejection;
use crate::model::{Category, Item, ItemDraft, SortOrder};
use crate::snapshot::Snapshot;

pub struct CategoryStore<C: Clock = SystemClock, G: IdGen = UuidGen> {
    clock: C,
    ids: G,
    categories: Vec<Category>,
    selected: Option<String>,
}

impl CategoryStore {
    pub fn new() -> Self {
        Self::with_sources(SystemClock, UuidGen)
    }
}

impl Default for CategoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, G: IdGen> CategoryStore<C, G> {
    pub fn with_sources(clock: C, ids: G) -> Self {
        Self {
            clock,
            ids,
            categories: Vec::new(),
            selected: None,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn find_category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// The category the current selection resolves to, if any.
    pub fn selected_category(&self) -> Option<&Category> {
        let id = self.selected.as_deref()?;
        self.categories.iter().find(|c| c.id == id)
    }

    /// Appends a new empty category. The name is stored trimmed.
    pub fn add_category(&mut self, name: &str) -> Result<Category, Rejection> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Rejection::EmptyName);
        }
        let now = self.clock.now();
        let category = Category::new(self.ids.next_id(), name.to_string(), now);
        self.categories.push(category.clone());
        Ok(category)
    }

    /// Removes the first category whose name matches exactly, discarding all
    /// of its items. Clears the selection if it pointed there.
    pub fn delete_category(&mut self, name: &str) -> Result<Category, Rejection> {
        let pos = self
            .categories
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| Rejection::CategoryNotFound(name.to_string()))?;
        let removed = self.categories.remove(pos);
        if self.selected.as_deref() == Some(removed.id.as_str()) {
            self.selected = None;
        }
        Ok(removed)
    }

    /// Sets the selection. Existence is not validated here; callers are
    /// expected to pass an id obtained from this store, and resolution
    /// happens on use.
    pub fn select_category(&mut self, id: &str) {
        self.selected = Some(id.to_string());
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Adds an item to the selected category, assigning a fresh id and
    /// timestamps and refreshing the category's `updated_at`.
    pub fn add_item(&mut self, draft: ItemDraft) -> Result<Item, Rejection> {
        if self.selected_category().is_none() {
            return Err(Rejection::NoCategorySelected);
        }
        if draft.name.trim().is_empty() {
            return Err(Rejection::EmptyName);
        }
        let now = self.clock.now();
        let id = self.ids.next_id();
        let category = self.selected_mut()?;
        let item = Item::new(id, draft, now);
        category.items.push(item.clone());
        category.updated_at = now;
        Ok(item)
    }

    /// Replaces the editable fields of the item at `index` in the selected
    /// category. The item keeps its id and `created_at`; `updated_at` is
    /// refreshed on both the item and the owning category.
    pub fn edit_item(&mut self, index: usize, draft: ItemDraft) -> Result<Item, Rejection> {
        let now = self.clock.now();
        let category = self.selected_mut()?;
        let len = category.items.len();
        let item = category
            .items
            .get_mut(index)
            .ok_or(Rejection::IndexOutOfRange { index, len })?;
        item.name = draft.name.trim().to_string();
        item.description = draft.description;
        item.tags = draft.tags;
        item.updated_at = now;
        let updated = item.clone();
        category.updated_at = now;
        Ok(updated)
    }

    /// Removes the item at `index` in the selected category, refreshing the
    /// category's `updated_at`.
    pub fn delete_item(&mut self, index: usize) -> Result<Item, Rejection> {
        let now = self.clock.now();
        let category = self.selected_mut()?;
        let len = category.items.len();
        if index >= len {
            return Err(Rejection::IndexOutOfRange { index, len });
        }
        let removed = category.items.remove(index);
        category.updated_at = now;
        Ok(removed)
    }

    /// Sets the display sort order on the category with the given id. The
    /// selection resolves by id, so a selected category reflects the change
    /// immediately.
    pub fn update_category_sort_order(
        &mut self,
        category_id: &str,
        sort_order: SortOrder,
    ) -> Result<Category, Rejection> {
        let now = self.clock.now();
        let category = self
            .categories
            .iter_mut()
            .find(|c| c.id == category_id)
            .ok_or_else(|| Rejection::CategoryNotFound(category_id.to_string()))?;
        category.sort_order = sort_order;
        category.updated_at = now;
        Ok(category.clone())
    }

    /// Replaces the entire collection with the snapshot's categories in one
    /// swap and clears the selection. Only ever call this with output of the
    /// validate → normalize pipeline.
    pub fn import_data(&mut self, snapshot: Snapshot) {
        self.categories = snapshot.categories;
        self.selected = None;
    }

    /// Empties the store and the selection.
    pub fn clear_all(&mut self) {
        self.categories.clear();
        self.selected = None;
    }

    fn selected_mut(&mut self) -> Result<&mut Category, Rejection> {
        let id = self.selected.clone().ok_or(Rejection::NoCategorySelected)?;
        self.categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(Rejection::NoCategorySelected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::fixtures::{FixedClock, SeqIdGen};

    fn test_store() -> (CategoryStore<FixedClock, SeqIdGen>, FixedClock) {
        let clock = FixedClock::epoch();
        let store = CategoryStore::with_sources(clock.clone(), SeqIdGen::new());
        (store, clock)
    }

    fn store_with_selected(
        name: &str,
    ) -> (CategoryStore<FixedClock, SeqIdGen>, FixedClock, String) {
        let (mut store, clock) = test_store();
        let category = store.add_category(name).unwrap();
        store.select_category(&category.id);
        (store, clock, category.id)
    }

    #[test]
    fn add_category_appends_with_defaults() {
        let (mut store, _clock) = test_store();
        let category = store.add_category("Recipes").unwrap();

        assert_eq!(category.id, "id-1");
        assert_eq!(category.sort_order, SortOrder::Alphabetical);
        assert!(category.items.is_empty());
        assert_eq!(store.categories().len(), 1);
        assert_eq!(store.categories()[0].name, "Recipes");
    }

    #[test]
    fn add_category_rejects_blank_names() {
        let (mut store, _clock) = test_store();
        assert_eq!(store.add_category(""), Err(Rejection::EmptyName));
        assert_eq!(store.add_category("   "), Err(Rejection::EmptyName));
        assert_eq!(store.categories().len(), 0);
    }

    #[test]
    fn add_category_preserves_insertion_order() {
        let (mut store, _clock) = test_store();
        store.add_category("Zeta").unwrap();
        store.add_category("Alpha").unwrap();
        let names: Vec<_> = store.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Zeta", "Alpha"]);
    }

    #[test]
    fn delete_category_clears_a_matching_selection() {
        let (mut store, _clock, _id) = store_with_selected("Recipes");
        store.delete_category("Recipes").unwrap();
        assert!(store.selected_category().is_none());
        assert!(store.categories().is_empty());
    }

    #[test]
    fn delete_category_keeps_an_unrelated_selection() {
        let (mut store, _clock) = test_store();
        let keep = store.add_category("Keep").unwrap();
        store.add_category("Drop").unwrap();
        store.select_category(&keep.id);

        store.delete_category("Drop").unwrap();
        assert_eq!(store.selected_category().unwrap().name, "Keep");
    }

    #[test]
    fn delete_category_rejects_unknown_names() {
        let (mut store, _clock) = test_store();
        assert_eq!(
            store.delete_category("Ghost"),
            Err(Rejection::CategoryNotFound("Ghost".into()))
        );
    }

    #[test]
    fn add_item_requires_a_selection() {
        let (mut store, _clock) = test_store();
        store.add_category("Recipes").unwrap();
        assert_eq!(
            store.add_item(ItemDraft::new("Tea")),
            Err(Rejection::NoCategorySelected)
        );
    }

    #[test]
    fn add_item_rejects_blank_names() {
        let (mut store, _clock, _id) = store_with_selected("Recipes");
        assert_eq!(
            store.add_item(ItemDraft::new("   ")),
            Err(Rejection::EmptyName)
        );
        assert!(store.selected_category().unwrap().items.is_empty());
    }

    #[test]
    fn add_item_refreshes_the_category_timestamp() {
        let (mut store, clock, _id) = store_with_selected("Recipes");
        let created = store.selected_category().unwrap().updated_at;

        clock.advance_secs(60);
        store.add_item(ItemDraft::new("Tea")).unwrap();

        let category = store.selected_category().unwrap();
        assert_eq!(category.items.len(), 1);
        assert!(category.updated_at > created);
    }

    #[test]
    fn edit_item_preserves_id_and_created_at() {
        let (mut store, clock, _id) = store_with_selected("Recipes");
        let item = store
            .add_item(ItemDraft::new("Tea").with_description("Hot tea"))
            .unwrap();

        clock.advance_secs(60);
        let updated = store
            .edit_item(0, ItemDraft::new("Green Tea").with_tags(vec!["drink".into()]))
            .unwrap();

        assert_eq!(updated.id, item.id);
        assert_eq!(updated.created_at, item.created_at);
        assert_eq!(updated.name, "Green Tea");
        assert_eq!(updated.tags, ["drink"]);
        assert!(updated.updated_at > item.updated_at);
    }

    #[test]
    fn edit_item_rejects_out_of_range_indexes() {
        let (mut store, _clock, _id) = store_with_selected("Recipes");
        store.add_item(ItemDraft::new("Tea")).unwrap();
        assert_eq!(
            store.edit_item(5, ItemDraft::new("Coffee")),
            Err(Rejection::IndexOutOfRange { index: 5, len: 1 })
        );
        assert_eq!(store.selected_category().unwrap().items[0].name, "Tea");
    }

    #[test]
    fn delete_item_removes_exactly_one_and_leaves_other_categories_alone() {
        let (mut store, _clock) = test_store();
        let other = store.add_category("Other").unwrap();
        let recipes = store.add_category("Recipes").unwrap();

        store.select_category(&other.id);
        store.add_item(ItemDraft::new("Untouched")).unwrap();

        store.select_category(&recipes.id);
        store.add_item(ItemDraft::new("Tea")).unwrap();
        store.add_item(ItemDraft::new("Coffee")).unwrap();

        let removed = store.delete_item(0).unwrap();
        assert_eq!(removed.name, "Tea");

        let recipes = store.find_category("Recipes").unwrap();
        assert_eq!(recipes.items.len(), 1);
        assert_eq!(recipes.items[0].name, "Coffee");
        assert_eq!(store.find_category("Other").unwrap().items.len(), 1);
    }

    #[test]
    fn delete_item_rejects_out_of_range_indexes() {
        let (mut store, _clock, _id) = store_with_selected("Recipes");
        assert_eq!(
            store.delete_item(0),
            Err(Rejection::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn sort_order_update_is_visible_through_the_selection() {
        let (mut store, _clock, id) = store_with_selected("Recipes");
        store
            .update_category_sort_order(&id, SortOrder::DateAdded)
            .unwrap();
        assert_eq!(
            store.selected_category().unwrap().sort_order,
            SortOrder::DateAdded
        );
    }

    #[test]
    fn sort_order_update_rejects_unknown_ids() {
        let (mut store, _clock) = test_store();
        assert_eq!(
            store.update_category_sort_order("nope", SortOrder::DateAdded),
            Err(Rejection::CategoryNotFound("nope".into()))
        );
    }

    #[test]
    fn import_replaces_everything_and_clears_the_selection() {
        let (mut store, clock, _id) = store_with_selected("Old");
        store.add_item(ItemDraft::new("Old item")).unwrap();

        let incoming = Category::new("id-9".into(), "New".into(), clock.now());
        store.import_data(Snapshot {
            categories: vec![incoming],
            last_backup: None,
        });

        assert!(store.selected_category().is_none());
        assert_eq!(store.categories().len(), 1);
        assert_eq!(store.categories()[0].name, "New");
    }

    #[test]
    fn selection_can_be_cleared_explicitly() {
        let (mut store, _clock, _id) = store_with_selected("Recipes");
        store.clear_selection();
        assert!(store.selected_category().is_none());
        assert_eq!(
            store.add_item(ItemDraft::new("Tea")),
            Err(Rejection::NoCategorySelected)
        );
    }

    #[test]
    fn clear_all_empties_store_and_selection() {
        let (mut store, _clock, _id) = store_with_selected("Recipes");
        store.add_item(ItemDraft::new("Tea")).unwrap();
        store.clear_all();
        assert!(store.categories().is_empty());
        assert!(store.selected_category().is_none());
    }
}
