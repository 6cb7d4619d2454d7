pub mod state;

pub mod variant;

pub mod overlay;

pub mod timing;

pub mod components;

pub mod theme;

mod utils;
pub use utils::SharedString;
