//! List-page state as plain data with pure update methods.
//!
//! Views keep these structs inside a signal and call the update methods in
//! event handlers; nothing here touches signals, globals or the DOM.

pub mod search;
pub mod selection;

pub use search::SearchParams;
pub use selection::SelectionState;
