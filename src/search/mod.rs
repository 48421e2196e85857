//! Card search: query language, attribute filters and result ordering.
//!
//! ## Key Types
//!
//! - `Comparator`: Parsed numeric filter (`>=2000`, `?`)
//! - `Query`: Parsed keyword query (elements with kind and exclusion)
//! - `FilterParams`: Type family, attribute, marker and limit selections
//! - `FilterEngine`: Applies a query and parameters to the database
//! - `SortKey`: Result ordering after the exact-name partition

pub mod comparator;
pub mod filter;
pub mod name;
pub mod query;
pub mod sort;

pub use comparator::{CompareOp, Comparator};
pub use filter::{FilterEngine, FilterParams, LimitFilter, TypeFamily};
pub use name::card_name_contains;
pub use query::{ElementKind, Query, QueryElement};
pub use sort::{compare_cards, partition_exact_name, sort_results, SortKey};
