// Chunk: docs/chunks/item_catalog - Selectable items with identity
//!
//! Selectable items and the catalog they live in.
//!
//! An [`Item`] pairs a display `name` (what the query is matched against) with
//! an opaque `payload` handed back to the host when the item is selected.
//! Every item carries an [`ItemId`] assigned at construction. Clones share the
//! id, so a clone is the "same" item; two items built separately are distinct
//! even when their names are equal.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Process-unique identity of an [`Item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    /// Returns the raw id value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(1);

/// Generates a new unique item ID.
fn gen_item_id() -> ItemId {
    ItemId(NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed))
}

/// A selectable entry: a matchable name plus an opaque payload.
#[derive(Debug, Clone)]
pub struct Item<P> {
    id: ItemId,
    name: String,
    payload: P,
}

impl<P> Item<P> {
    /// Creates an item with a fresh identity.
    pub fn new(name: impl Into<String>, payload: P) -> Self {
        Self {
            id: gen_item_id(),
            name: name.into(),
            payload,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn into_payload(self) -> P {
        self.payload
    }

    /// Returns true if `other` is this item (or a clone of it).
    ///
    /// Names and payloads are never compared.
    pub fn is_same(&self, other: &Item<P>) -> bool {
        self.id == other.id
    }
}

#[derive(Serialize)]
struct ItemRef<'a, P> {
    name: &'a str,
    payload: &'a P,
}

#[derive(Deserialize)]
struct ItemData<P> {
    name: String,
    #[serde(alias = "item")]
    payload: P,
}

impl<P: Serialize> Serialize for Item<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ItemRef {
            name: &self.name,
            payload: &self.payload,
        }
        .serialize(serializer)
    }
}

// Deserialized items always get a fresh identity.
impl<'de, P: Deserialize<'de>> Deserialize<'de> for Item<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = ItemData::<P>::deserialize(deserializer)?;
        Ok(Item::new(data.name, data.payload))
    }
}

/// The ordered, immutable list of items for one configuration snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(serialize = "P: Serialize", deserialize = "P: Deserialize<'de>"))]
pub struct ItemCatalog<P> {
    items: Vec<Item<P>>,
}

impl<P> ItemCatalog<P> {
    pub fn new(items: Vec<Item<P>>) -> Self {
        Self { items }
    }

    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    pub fn items(&self) -> &[Item<P>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item<P>> {
        self.items.iter()
    }

    /// Returns the catalog position of the item with the given identity.
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Looks up an item by identity.
    pub fn get(&self, id: ItemId) -> Option<&Item<P>> {
        self.items.iter().find(|item| item.id == id)
    }
}

impl<P> Default for ItemCatalog<P> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<P> From<Vec<Item<P>>> for ItemCatalog<P> {
    fn from(items: Vec<Item<P>>) -> Self {
        Self::new(items)
    }
}

impl<P> FromIterator<Item<P>> for ItemCatalog<P> {
    fn from_iter<I: IntoIterator<Item = Item<P>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, P> IntoIterator for &'a ItemCatalog<P> {
    type Item = &'a Item<P>;
    type IntoIter = std::slice::Iter<'a, Item<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_items_have_distinct_ids() {
        let a = Item::new("Pizza", 1);
        let b = Item::new("Pizza", 1);
        assert_ne!(a.id(), b.id());
        assert!(!a.is_same(&b));
    }

    #[test]
    fn clone_shares_identity() {
        let a = Item::new("Pizza", 1);
        let b = a.clone();
        assert_eq!(a.id(), b.id());
        assert!(a.is_same(&b));
    }

    #[test]
    fn accessors_return_fields() {
        let item = Item::new("Burger", "payload");
        assert_eq!(item.name(), "Burger");
        assert_eq!(*item.payload(), "payload");
        assert_eq!(item.into_payload(), "payload");
    }

    #[test]
    fn catalog_lookup_by_identity() {
        let pizza = Item::new("Pizza", 0);
        let twin = Item::new("Pizza", 1);
        let catalog = ItemCatalog::new(vec![pizza.clone(), twin.clone()]);

        assert_eq!(catalog.position(pizza.id()), Some(0));
        assert_eq!(catalog.position(twin.id()), Some(1));
        assert_eq!(catalog.get(twin.id()).map(|i| *i.payload()), Some(1));

        let stranger = Item::new("Pizza", 2);
        assert_eq!(catalog.position(stranger.id()), None);
    }

    #[test]
    fn serializes_name_and_payload_only() {
        let item = Item::new("Kebab", serde_json::json!({"id": 2}));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Kebab", "payload": {"id": 2}}));
    }

    #[test]
    fn deserialize_accepts_item_alias() {
        let item: Item<u32> = serde_json::from_str(r#"{"name": "Pie", "item": 7}"#).unwrap();
        assert_eq!(item.name(), "Pie");
        assert_eq!(*item.payload(), 7);
    }

    #[test]
    fn deserialized_items_get_fresh_ids() {
        let json = r#"[{"name": "A", "payload": 1}, {"name": "A", "payload": 1}]"#;
        let catalog: ItemCatalog<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_ne!(catalog.items()[0].id(), catalog.items()[1].id());
    }
}
