//! Derived read-side projections.
//!
//! # Responsibility
//! - Compute display orderings and date buckets from store snapshots.
//!
//! # Invariants
//! - Projections are pure: they own no state and never mutate a store.

pub mod calendar;
pub mod sort;
