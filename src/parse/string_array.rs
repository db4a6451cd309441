#![forbid(unsafe_code)]

//! Append-only storage for borrowed command-line tokens
//!
//! A [`StringArray`] never owns token contents. Every slot is a `&str` view
//! into the argument vector the classifier was handed, so the vector must
//! outlive the array.

use serde::Serialize;
use std::collections::TryReserveError;

/// Capacity used for each array when none is configured
pub const DEFAULT_CAPACITY: usize = 5;

/// What happens when a push finds every slot occupied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthPolicy {
    /// Double the capacity and keep going
    #[default]
    Grow,
    /// Refuse the push with [`PushError::Full`]
    Fixed,
}

/// Failure modes of [`StringArray`] mutation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PushError {
    #[error("array is full ({capacity} slots)")]
    Full { capacity: usize },

    #[error(transparent)]
    Alloc(#[from] TryReserveError),
}

/// Ordered, append-only sequence of borrowed tokens
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct StringArray<'a> {
    data: Vec<&'a str>,
    #[serde(skip)]
    policy: GrowthPolicy,
}

impl<'a> StringArray<'a> {
    /// The zero-value array: no storage has been reserved
    pub fn unallocated() -> Self {
        StringArray {
            data: Vec::new(),
            policy: GrowthPolicy::default(),
        }
    }

    /// Reserves exactly `capacity` slots, reporting allocation failure
    /// instead of aborting.
    pub fn with_capacity(capacity: usize, policy: GrowthPolicy) -> Result<Self, TryReserveError> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)?;
        Ok(StringArray { data, policy })
    }

    /// Appends `item` to the next free slot
    pub fn push(&mut self, item: &'a str) -> Result<(), PushError> {
        if self.data.len() == self.data.capacity() {
            match self.policy {
                GrowthPolicy::Fixed => {
                    return Err(PushError::Full {
                        capacity: self.data.capacity(),
                    });
                }
                GrowthPolicy::Grow => {
                    // try_reserve alone may grow by less than double
                    let additional = self.data.capacity().max(1);
                    self.data.try_reserve_exact(additional)?;
                    tracing::trace!(capacity = self.data.capacity(), "grew string array");
                }
            }
        }
        self.data.push(item);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// False for the zero-value array produced by [`StringArray::unallocated`]
    pub fn is_allocated(&self) -> bool {
        self.data.capacity() > 0
    }

    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.data.get(index).copied()
    }

    pub fn last(&self) -> Option<&'a str> {
        self.data.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.data.iter().copied()
    }

    pub fn as_slice(&self) -> &[&'a str] {
        &self.data
    }
}

impl<'a, 'b> IntoIterator for &'b StringArray<'a> {
    type Item = &'b &'a str;
    type IntoIter = std::slice::Iter<'b, &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_capacity_starts_empty() {
        let array = StringArray::with_capacity(DEFAULT_CAPACITY, GrowthPolicy::Grow).unwrap();
        assert_eq!(array.len(), 0);
        assert!(array.is_empty());
        assert!(array.capacity() >= DEFAULT_CAPACITY);
        assert!(array.is_allocated());
    }

    #[test]
    fn test_unallocated_has_no_storage() {
        let array = StringArray::unallocated();
        assert!(!array.is_allocated());
        assert_eq!(array.capacity(), 0);
        assert_eq!(array.last(), None);
    }

    #[test]
    fn test_push_preserves_order() {
        let mut array = StringArray::with_capacity(2, GrowthPolicy::Grow).unwrap();
        for token in ["one", "two", "three"] {
            array.push(token).unwrap();
        }
        assert_eq!(array.as_slice(), &["one", "two", "three"]);
        assert_eq!(array.get(1), Some("two"));
        assert_eq!(array.last(), Some("three"));
    }

    #[test]
    fn test_grow_policy_doubles_capacity() {
        let mut array = StringArray::with_capacity(4, GrowthPolicy::Grow).unwrap();
        let start = array.capacity();
        for _ in 0..=start {
            array.push("x").unwrap();
        }
        assert!(array.capacity() >= start * 2);
        assert_eq!(array.len(), start + 1);
    }

    #[test]
    fn test_grow_policy_from_unallocated() {
        let mut array = StringArray::unallocated();
        array.push("first").unwrap();
        assert!(array.is_allocated());
        assert_eq!(array.as_slice(), &["first"]);
    }

    #[test]
    fn test_fixed_policy_fills_to_capacity() {
        let mut array = StringArray::with_capacity(3, GrowthPolicy::Fixed).unwrap();
        let capacity = array.capacity();
        for _ in 0..capacity {
            array.push("ok").unwrap();
        }
        assert_eq!(array.len(), capacity);
    }

    #[test]
    fn test_fixed_policy_rejects_overflow() {
        let mut array = StringArray::with_capacity(3, GrowthPolicy::Fixed).unwrap();
        let capacity = array.capacity();
        for _ in 0..capacity {
            array.push("ok").unwrap();
        }

        let err = array.push("one too many").unwrap_err();
        assert_eq!(err, PushError::Full { capacity });
        // The rejected token is not stored
        assert_eq!(array.len(), capacity);
        assert!(array.iter().all(|t| t == "ok"));
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let mut array = StringArray::with_capacity(2, GrowthPolicy::Grow).unwrap();
        array.push("-a").unwrap();
        array.push("-b").unwrap();
        assert_eq!(serde_json::to_string(&array).unwrap(), r#"["-a","-b"]"#);
    }
}
