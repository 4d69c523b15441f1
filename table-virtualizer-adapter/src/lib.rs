//! Caller-side adapter utilities for the `table-virtualizer` crate.
//!
//! The `table-virtualizer` crate only computes windows and owns per-table UI state; sorting
//! the rows, appending pages and keeping the viewport steady are left to its caller. This
//! crate provides small, framework-neutral helpers for those jobs:
//!
//! - [`TableController`], which owns the rows and drives a `VirtualTable` over them
//! - Scroll anchoring by row identity (e.g. inserting older rows above without visual jumps)
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod controller;

#[cfg(test)]
mod tests;

pub use anchor::{ScrollAnchor, apply_anchor, capture_first_visible_anchor};
pub use controller::{RowComparator, TableController};
