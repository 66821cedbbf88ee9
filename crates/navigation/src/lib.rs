//! Navigation model for the education admin console.
//!
//! Holds the static menu tree and the path-to-entry resolver used by the
//! shell for breadcrumb and sidebar selection. Pure data and pure functions;
//! everything here is UI-agnostic.

pub mod menu;
