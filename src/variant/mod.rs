//! Declarative style-variant resolution.
//!
//! A [`VariantTable`] maps a tuple of named option values to a flat
//! [`AttrSet`] of presentation tokens. Resolution is pure and deterministic:
//! base attributes are overridden by per-axis attributes, which are in turn
//! overridden by compound rules that only apply when several specific option
//! values co-occur.

mod attrs;
pub use attrs::*;

mod table;
pub use table::*;
