//! Typed single-key slots.

use std::marker::PhantomData;

use serde::{de::DeserializeOwned, Serialize};

use crate::{Cache, CacheError, KvBackend};

/// A single named entry holding one value of type `T`.
///
/// # Example
///
/// ```rust
/// use cosmetica_cache::{MemoryBackend, Slot};
///
/// let slot: Slot<String, _> = Slot::new(MemoryBackend::new(), "greeting");
/// assert_eq!(slot.load().unwrap(), None);
///
/// slot.store(&"hello".to_string()).unwrap();
/// assert_eq!(slot.load().unwrap().as_deref(), Some("hello"));
///
/// slot.clear().unwrap();
/// assert!(!slot.is_present().unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Slot<T, B> {
    cache: Cache<B>,
    key: &'static str,
    _phantom: PhantomData<T>,
}

impl<T, B> Slot<T, B>
where
    T: Serialize + DeserializeOwned,
    B: KvBackend,
{
    /// Bind a slot to `key` on the given backend.
    pub fn new(backend: B, key: &'static str) -> Self {
        Self {
            cache: Cache::new(backend),
            key,
            _phantom: PhantomData,
        }
    }

    /// Read the value, `None` if the slot is empty.
    pub fn load(&self) -> Result<Option<T>, CacheError> {
        self.cache.get(self.key)
    }

    /// Overwrite the slot.
    pub fn store(&self, value: &T) -> Result<(), CacheError> {
        self.cache.set(self.key, value)
    }

    /// Empty the slot.
    pub fn clear(&self) -> Result<(), CacheError> {
        self.cache.delete(self.key)
    }

    /// Check if the slot holds anything (valid or not).
    pub fn is_present(&self) -> Result<bool, CacheError> {
        self.cache.exists(self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryBackend;

    #[test]
    fn test_slot_roundtrip() {
        let slot: Slot<Vec<u32>, _> = Slot::new(MemoryBackend::new(), "numbers");
        slot.store(&vec![3, 1, 2]).unwrap();
        assert_eq!(slot.load().unwrap(), Some(vec![3, 1, 2]));
    }

    #[test]
    fn test_slots_share_backend() {
        let backend = MemoryBackend::new();
        let a: Slot<u32, _> = Slot::new(backend.clone(), "a");
        let b: Slot<u32, _> = Slot::new(backend.clone(), "b");

        a.store(&1).unwrap();
        b.store(&2).unwrap();

        assert_eq!(backend.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(backend.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_present_but_malformed() {
        let backend = MemoryBackend::new();
        backend.set("n", "\"not a number\"").unwrap();
        let slot: Slot<u32, _> = Slot::new(backend, "n");

        assert!(slot.is_present().unwrap());
        assert!(slot.load().unwrap_err().is_malformed_data());
    }
}
