// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! JSON persistence over an injected key-value store.
//!
//! [`KeyValueStore`] is the capability a host environment provides (string
//! keys, string values). [`LocalStorage`] layers JSON (de)serialization on top
//! and logs every failure before returning it.

mod file;
mod memory;

use anyhow::Result as StoreResult;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// String-keyed text storage supplied by the hosting environment.
///
/// Production code uses [`JsonFileStore`]; tests can use [`MemoryStore`] or
/// their own implementation.
pub trait KeyValueStore: Send + Sync {
    /// Read the text stored under `key`, if any.
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Delete `key`; deleting a missing key is not an error.
    fn remove_item(&self, key: &str) -> StoreResult<()>;

    /// Delete every key.
    fn clear(&self) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        (**self).remove_item(key)
    }

    fn clear(&self) -> StoreResult<()> {
        (**self).clear()
    }
}

/// JSON accessors bound to one store.
#[derive(Debug, Default)]
pub struct LocalStorage<S> {
    store: S,
}

impl<S: KeyValueStore> LocalStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Serialize `value` to JSON text and store it under `key`.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let result = serde_json::to_string(value)
            .map_err(|source| Error::Serialize {
                key: key.to_string(),
                source,
            })
            .and_then(|text| self.store.set_item(key, &text).map_err(Error::from));
        result.inspect_err(|err| {
            tracing::error!(key, error = %err, "failed to set stored value");
        })
    }

    /// Parse the JSON stored under `key`; a missing or empty entry yields `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let result = self.store.get_item(key).map_err(Error::from).and_then(|stored| {
            match stored.filter(|text| !text.is_empty()) {
                Some(text) => serde_json::from_str(&text)
                    .map(Some)
                    .map_err(|source| Error::Deserialize {
                        key: key.to_string(),
                        source,
                    }),
                None => Ok(None),
            }
        });
        result.inspect_err(|err| {
            tracing::error!(key, error = %err, "failed to retrieve stored value");
        })
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        self.store
            .remove_item(key)
            .map_err(Error::from)
            .inspect_err(|err| {
                tracing::error!(key, error = %err, "failed to remove stored value");
            })
    }

    pub fn clear(&self) -> Result<()> {
        self.store
            .clear()
            .map_err(Error::from)
            .inspect_err(|err| {
                tracing::error!(error = %err, "failed to clear store");
            })
    }
}
