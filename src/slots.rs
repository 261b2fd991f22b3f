//! Owned sequence with an explicit, doubling capacity.
//!
//! `Vec` is free to over-allocate, so its own `capacity()` says nothing
//! reproducible. [`Slots`] keeps a logical capacity alongside the items and
//! only ever grows it by doubling when an insert finds the sequence full.
//! Storage for that capacity is reserved up front, so a failed reservation
//! surfaces as [`Error::ResourceExhausted`] instead of aborting.

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

#[derive(Debug)]
pub struct Slots<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Slots<T> {
    /// Create an empty sequence able to hold `capacity` items before growing.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::invalid("capacity must be greater than zero"));
        }
        let mut items = Vec::new();
        items.try_reserve_exact(capacity)?;
        Ok(Self { items, capacity })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// First item matching `pred`, scanning in insertion order.
    pub fn find(&self, pred: impl FnMut(&&T) -> bool) -> Option<&T> {
        self.items.iter().find(pred)
    }

    pub fn find_mut(&mut self, pred: impl FnMut(&&mut T) -> bool) -> Option<&mut T> {
        self.items.iter_mut().find(pred)
    }

    /// Double the capacity if the sequence is full.
    ///
    /// Returns whether growth happened. On failure nothing changes.
    pub fn reserve_slot(&mut self) -> Result<bool> {
        if !self.is_full() {
            return Ok(false);
        }
        let new_capacity = self
            .capacity
            .checked_mul(2)
            .ok_or_else(|| Error::ResourceExhausted("capacity overflow".to_string()))?;
        self.items.try_reserve_exact(new_capacity - self.items.len())?;
        self.capacity = new_capacity;
        Ok(true)
    }

    /// Append `item`, doubling the capacity first if the sequence is full.
    pub fn push(&mut self, item: T) -> Result<()> {
        self.reserve_slot()?;
        self.items.push(item);
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a Slots<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Serialize> Serialize for Slots<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.items)
    }
}
