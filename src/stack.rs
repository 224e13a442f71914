//! Ordered accumulation of diagnostic records with an explicit capacity
//! policy.
//!
//! Capacity follows a power-of-two policy layered over `Vec`: growth seeds at
//! [`MIN_CAPACITY`] and doubles from the current capacity, shrink triggers
//! only when a pop leaves the length at an exact power of two. Length lives
//! in the `u16` domain and saturates at [`MAX_LEN`] instead of wrapping.

use std::collections::TryReserveError;

use crate::record::Diagnostic;

/// Smallest nonzero capacity; growth seeds here and shrink never goes below.
pub const MIN_CAPACITY: u16 = 4;

/// Ceiling of the length domain; a push at the ceiling drops the new record.
pub const MAX_LEN: u16 = u16::MAX;

/// A growth or merge reallocation could not be satisfied.
///
/// The stack keeps its prior storage and length when this is returned.
#[derive(Debug, thiserror::Error)]
#[error("diagnostic stack allocation failed: {0}")]
pub struct AllocError(#[from] TryReserveError);

/// Order-preserving container of diagnostic records with FIFO drain.
///
/// Pops favor simple in-order drain over speed: removal shifts the remaining
/// records down one position, matching the intended use as a bounded
/// accumulate-then-drain buffer.
#[derive(Debug, Default)]
pub struct DiagnosticStack<'a> {
    records: Vec<Diagnostic<'a>>,
    cap: u16,
}

impl<'a> DiagnosticStack<'a> {
    /// Creates an empty stack with zero capacity and no storage.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
            cap: 0,
        }
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when no records are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Current policy capacity, in records.
    #[must_use]
    pub fn capacity(&self) -> usize {
        usize::from(self.cap)
    }

    /// Appends a record, growing capacity per the power-of-two policy.
    ///
    /// A push at the saturated length leaves the stack unchanged: the newest
    /// record is dropped, not wrapped.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] when the grown storage cannot be allocated;
    /// the stack keeps its prior storage and length.
    pub fn push(&mut self, record: Diagnostic<'a>) -> Result<(), AllocError> {
        let Some(wanted) = self.len_u16().checked_add(1) else {
            return Ok(());
        };
        self.grow_to(wanted)?;
        self.records.push(record);
        Ok(())
    }

    /// Removes and returns the oldest record (first-in-first-out).
    ///
    /// When the new length is an exact power of two and
    /// `max(length, MIN_CAPACITY)` sits strictly below the policy capacity,
    /// capacity shrinks to that target, reclaiming memory from a drained
    /// burst without thrashing on every pop.
    pub fn pop(&mut self) -> Option<Diagnostic<'a>> {
        if self.records.is_empty() {
            return None;
        }
        let record = self.records.remove(0);
        let len = self.len_u16();
        if len.is_power_of_two() {
            let target = len.max(MIN_CAPACITY);
            if target < self.cap {
                self.records.shrink_to(usize::from(target));
                self.cap = target;
            }
        }
        Some(record)
    }

    /// Appends all of `other`'s records in their existing order, then resets
    /// `other` to its constructed-empty state.
    ///
    /// Records past the length ceiling are dropped silently, oldest kept.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] when the grown storage cannot be allocated;
    /// both stacks are left intact.
    pub fn merge(&mut self, other: &mut Self) -> Result<(), AllocError> {
        if other.is_empty() {
            return Ok(());
        }
        let wanted = self.len_u16().saturating_add(other.len_u16());
        self.grow_to(wanted)?;
        let room = usize::from(MAX_LEN) - self.records.len();
        other.records.truncate(room.min(other.records.len()));
        self.records.append(&mut other.records);
        other.clear();
        Ok(())
    }

    /// Releases storage and zeroes the counters, returning the stack to its
    /// constructed-empty state. The stack remains usable afterwards.
    pub fn clear(&mut self) {
        self.records = Vec::new();
        self.cap = 0;
    }

    /// Length clamped into the `u16` domain.
    fn len_u16(&self) -> u16 {
        u16::try_from(self.records.len()).unwrap_or(MAX_LEN)
    }

    /// Ensures policy capacity ≥ `wanted`, doubling from the current
    /// capacity (seeding at [`MIN_CAPACITY`]) and reallocating at most once.
    fn grow_to(&mut self, wanted: u16) -> Result<(), AllocError> {
        if self.cap >= wanted {
            return Ok(());
        }
        let mut doubled = u32::from(self.cap.max(MIN_CAPACITY));
        while doubled < u32::from(wanted) {
            doubled <<= 1;
        }
        let cap = u16::try_from(doubled.min(u32::from(MAX_LEN))).unwrap_or(MAX_LEN);
        let additional = usize::from(cap) - self.records.len();
        self.records.try_reserve_exact(additional)?;
        self.cap = cap;
        Ok(())
    }
}

#[cfg(test)]
#[path = "stack_tests.rs"]
mod tests;
