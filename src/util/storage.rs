//! Browser `localStorage` access for the single persisted preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme manager only needs "read my key" and "write my key", so
//! storage sits behind `PreferenceStore`. The browser store is best-effort:
//! a blocked or missing `localStorage` reads as unset and drops writes.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;

pub trait PreferenceStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

/// `localStorage` entry under a fixed key.
#[derive(Clone, Debug)]
pub struct LocalStore {
    key: String,
}

impl LocalStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    #[cfg(test)]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(&self.key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save(&self, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            let _ = storage.set_item(&self.key, value);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = value;
        }
    }
}

/// In-memory store, used where no browser is present.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn with_value(value: &str) -> Self {
        Self { value: RefCell::new(Some(value.to_owned())) }
    }

    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value()
    }

    fn save(&self, value: &str) {
        *self.value.borrow_mut() = Some(value.to_owned());
    }
}
