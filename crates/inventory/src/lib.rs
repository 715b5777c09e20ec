//! Supply inventory domain module.
//!
//! This crate contains the business rules for supply stock, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage):
//! a name-sorted item store with binary-search lookup, and a per-snapshot
//! analysis that classifies stock levels and relates items stored in the
//! same location.

pub mod analysis;
pub mod item;
pub mod search;
pub mod sort;
pub mod store;

pub use analysis::{LocationGraph, StockReport, TargetDeviation, analyze, same_location};
pub use item::SupplyItem;
pub use search::find_by_name;
pub use sort::merge_sort_by_key;
pub use store::{ReadQuery, Store};
