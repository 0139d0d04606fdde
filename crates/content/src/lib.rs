//! Concrete content for the decision engine.
//!
//! This crate houses everything the core engine treats as polymorphic data:
//! - Discretized observables ([`RangeAttribute`], [`FlagAttribute`])
//! - The interning [`ActionRegistry`] (one identity per behavior name)
//! - Training-table loaders: TOML parsing of the situation→action table and
//!   skeleton generation when the file is missing
//!
//! The engine consumes these only through the `decision_tree` capability
//! traits; nothing here leaks into the tree itself.

pub mod actions;
pub mod attributes;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use actions::ActionRegistry;
pub use attributes::{FlagAttribute, Level, RangeAttribute};

#[cfg(feature = "loaders")]
pub use loaders::{LoadResult, TableLoader};
