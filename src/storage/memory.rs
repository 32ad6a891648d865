use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::errors::LedgerError;

use super::{Result, StorageGateway};

/// In-process gateway backed by a shared map.
///
/// Clones share the same underlying values, so a test can hand a clone to a
/// controller and later inspect, or reopen from, what was persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryGateway {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageGateway for MemoryGateway {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .read()
            .map_err(|_| LedgerError::Storage("memory gateway lock poisoned".into()))?;
        Ok(values.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .write()
            .map_err(|_| LedgerError::Storage("memory gateway lock poisoned".into()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_loads_as_none() {
        let gateway = MemoryGateway::new();
        assert!(gateway.load("entries").unwrap().is_none());
    }

    #[test]
    fn clones_share_saved_values() {
        let gateway = MemoryGateway::new();
        let clone = gateway.clone();
        gateway.save("theme", "dark").unwrap();
        assert_eq!(clone.load("theme").unwrap().as_deref(), Some("dark"));
    }
}
