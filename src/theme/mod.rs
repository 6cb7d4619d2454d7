//! Theme tokens and typed variant kinds.
//!
//! The schema itself lives in the `mosaic_ui_theme` crate; this module
//! re-exports it and adds the enum kinds components use to pick tokens.

pub use mosaic_ui_theme::*;

mod kinds;
pub use kinds::*;
