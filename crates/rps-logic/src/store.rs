//! Persistent key-value storage

use std::collections::BTreeMap;

/// Key-value store session state is written to (e.g. browser localStorage)
pub trait PersistentStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    /// Remove every key
    fn clear(&mut self);
}

/// In-memory store
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl PersistentStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<S: PersistentStore + ?Sized> PersistentStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_clear() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("playerScore"), None);

        store.set("playerScore", "3");
        store.set("playerScore", "4");
        assert_eq!(store.get("playerScore").as_deref(), Some("4"));
        assert_eq!(store.len(), 1);

        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.get("playerScore"), None);
    }

    #[test]
    fn test_borrowed_store_writes_through() {
        let mut store = MemoryStore::new();
        {
            let mut borrowed = &mut store;
            PersistentStore::set(&mut borrowed, "celebrate", "true");
        }
        assert_eq!(store.get("celebrate").as_deref(), Some("true"));
    }
}
