use crate::CoreResult;

use std::collections::BTreeMap;

/// String-valued key-value persistence.
///
/// Values are opaque strings; callers own their serialized form.
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` when absent.
    fn get(&self, key: &str) -> CoreResult<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&mut self, key: &str, value: String) -> CoreResult<()>;
}

/// In-process store with no durability.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one value.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = BTreeMap::new();
        values.insert(key.into(), value.into());
        Self { values }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> CoreResult<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}
