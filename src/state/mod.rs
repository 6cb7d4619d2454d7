//! Controlled/uncontrolled state hosting for compound components.
//!
//! Every stateful component in this crate is built from the same three
//! pieces: a [`TransitionRule`] describing how an interaction candidate maps
//! to the next value, a [`ControlHost`] owning (or mirroring) that value, and
//! a [`Scope`]/[`ScopeHandle`] pair giving descendant parts shared access to
//! the root's state without ambient lookup.

mod rules;
pub use rules::*;

mod host;
pub use host::*;

mod scope;
pub use scope::*;
