//! # skilldex-store
//!
//! The data layer: [`SkillStore`] re-reads the JSON source on every
//! load (edits are visible without a restart), and [`SkillQuery`]
//! applies the filter/sort parameters from a request to the loaded
//! collection.

pub mod query;
pub mod store;

pub use query::SkillQuery;
pub use store::SkillStore;
