//! The item store: an owned, name-sorted sequence of supply items.

use tracing::debug;

use wardstock_core::{StoreError, StoreResult};

use crate::item::SupplyItem;
use crate::search;
use crate::sort;

/// Ordered collection of supply items, sorted ascending by `name` between
/// mutations.
///
/// The store is exclusively owned by the caller and passed to every
/// operation; there is no hidden process-wide state. Sortedness by name is
/// the invariant the mutation operations uphold after each structural
/// change and the precondition [`search::find_by_name`] relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    items: Vec<SupplyItem>,
}

/// A read request: one item by name, or every item.
///
/// The reserved word `"all"` is kept out of the name space by parsing it
/// into its own variant, so a real item can never collide with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadQuery {
    All,
    Name(String),
}

impl ReadQuery {
    /// Parse user input; `"all"` (any ASCII case) selects every item.
    pub fn parse(input: &str) -> Self {
        if input.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Name(input.to_string())
        }
    }
}

impl Store {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a store from items in arbitrary order, sorting them by name.
    pub fn from_items(items: Vec<SupplyItem>) -> Self {
        Self {
            items: sort::merge_sort_by_key(&items, |item| item.name.clone()),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in current (sorted) order.
    pub fn items(&self) -> &[SupplyItem] {
        &self.items
    }

    /// Read-only lookup by name.
    pub fn get(&self, name: &str) -> StoreResult<&SupplyItem> {
        search::find_by_name(&self.items, name)
            .map(|(_, item)| item)
            .ok_or_else(|| StoreError::not_found(name))
    }

    /// Resolve a read query against the current snapshot.
    ///
    /// [`ReadQuery::All`] returns every item in sorted order; an empty store
    /// yields an empty list, not an error.
    pub fn read(&self, query: &ReadQuery) -> StoreResult<Vec<&SupplyItem>> {
        match query {
            ReadQuery::All => Ok(self.items.iter().collect()),
            ReadQuery::Name(name) => self.get(name).map(|item| vec![item]),
        }
    }

    /// Insert a new item; duplicate names are rejected.
    ///
    /// On success the full store is re-sorted to restore the name-order
    /// invariant. On rejection the store is left unchanged.
    pub fn add(&mut self, item: SupplyItem) -> StoreResult<()> {
        if search::find_by_name(&self.items, &item.name).is_some() {
            return Err(StoreError::duplicate(&item.name));
        }
        debug!(name = %item.name, location = %item.location, "adding item");
        self.items.push(item);
        self.items = sort::merge_sort_by_key(&self.items, |item| item.name.clone());
        Ok(())
    }

    /// Replace an item's current quantity in place.
    ///
    /// The name does not change, so the order invariant holds without a
    /// re-sort.
    pub fn update_quantity(&mut self, name: &str, new_quantity: u32) -> StoreResult<()> {
        let (index, _) = search::find_by_name(&self.items, name)
            .ok_or_else(|| StoreError::not_found(name))?;
        debug!(name, new_quantity, "updating quantity");
        self.items[index].current_quantity = new_quantity;
        Ok(())
    }

    /// Delete an item by name, returning it.
    ///
    /// Removal from a sorted sequence leaves the remainder sorted, so no
    /// re-sort is needed.
    pub fn remove(&mut self, name: &str) -> StoreResult<SupplyItem> {
        let (index, _) = search::find_by_name(&self.items, name)
            .ok_or_else(|| StoreError::not_found(name))?;
        debug!(name, "removing item");
        Ok(self.items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> SupplyItem {
        SupplyItem::new(name, "Depósito A", 10, 20, "unidades")
    }

    fn is_sorted_by_name(store: &Store) -> bool {
        store.items().windows(2).all(|w| w[0].name <= w[1].name)
    }

    #[test]
    fn from_items_sorts_by_name() {
        let store = Store::from_items(vec![item("Seringas"), item("Agulhas"), item("Luvas")]);
        let names: Vec<&str> = store.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Agulhas", "Luvas", "Seringas"]);
    }

    #[test]
    fn add_rejects_duplicate_and_leaves_store_unchanged() {
        let mut store = Store::from_items(vec![item("Luvas"), item("Seringas")]);
        let before = store.clone();

        let err = store.add(item("Luvas")).unwrap_err();
        assert_eq!(err, StoreError::duplicate("Luvas"));
        assert_eq!(store, before);
    }

    #[test]
    fn add_restores_sort_order() {
        let mut store = Store::from_items(vec![item("Luvas"), item("Seringas")]);
        store.add(item("Agulhas")).unwrap();
        assert_eq!(store.len(), 3);
        assert!(is_sorted_by_name(&store));
        assert_eq!(store.items()[0].name, "Agulhas");
    }

    #[test]
    fn update_quantity_is_idempotent() {
        let mut store = Store::from_items(vec![item("Luvas")]);
        store.update_quantity("Luvas", 42).unwrap();
        let once = store.clone();
        store.update_quantity("Luvas", 42).unwrap();
        assert_eq!(store, once);
        assert_eq!(store.get("Luvas").unwrap().current_quantity, 42);
    }

    #[test]
    fn update_and_remove_fail_on_absent_name() {
        let mut store = Store::from_items(vec![item("Luvas")]);
        let before = store.clone();

        assert_eq!(
            store.update_quantity("Gazes", 1).unwrap_err(),
            StoreError::not_found("Gazes")
        );
        assert_eq!(
            store.remove("Gazes").unwrap_err(),
            StoreError::not_found("Gazes")
        );
        assert_eq!(store, before);
    }

    #[test]
    fn add_then_remove_round_trips() {
        let original = Store::from_items(vec![item("Agulhas"), item("Seringas")]);
        let mut store = original.clone();

        store.add(item("Luvas")).unwrap();
        let removed = store.remove("Luvas").unwrap();

        assert_eq!(removed, item("Luvas"));
        assert_eq!(store, original);
    }

    #[test]
    fn store_stays_sorted_across_mutation_sequences() {
        let mut store = Store::new();
        for name in ["Seringas", "Agulhas", "Máscaras", "Álcool em gel", "Luvas"] {
            store.add(item(name)).unwrap();
            assert!(is_sorted_by_name(&store));
        }
        for name in ["Máscaras", "Seringas"] {
            store.remove(name).unwrap();
            assert!(is_sorted_by_name(&store));
        }
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn read_query_parse_reserves_all() {
        assert_eq!(ReadQuery::parse("all"), ReadQuery::All);
        assert_eq!(ReadQuery::parse("ALL"), ReadQuery::All);
        assert_eq!(
            ReadQuery::parse("Luvas"),
            ReadQuery::Name("Luvas".to_string())
        );
    }

    #[test]
    fn read_all_on_empty_store_is_empty_not_an_error() {
        let store = Store::new();
        assert!(store.read(&ReadQuery::All).unwrap().is_empty());
    }

    #[test]
    fn read_by_name_returns_single_item_or_not_found() {
        let store = Store::from_items(vec![item("Luvas"), item("Seringas")]);

        let hits = store.read(&ReadQuery::parse("Seringas")).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Seringas");

        assert_eq!(
            store.read(&ReadQuery::parse("Gazes")).unwrap_err(),
            StoreError::not_found("Gazes")
        );
    }
}
