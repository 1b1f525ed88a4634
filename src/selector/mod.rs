//! The selection core: which parent, child and grandchild are chosen, how a
//! change at one level resets the levels below it, and which files the
//! current choice resolves to.

mod level;
mod operation;
mod resolver;
mod selection_error;
mod selection_state;
mod selector;

pub use level::SelectionLevel;
pub use operation::Operation;
pub use resolver::resolve_files;
pub use selection_error::SelectionError;
pub use selection_state::SelectionState;
pub use selector::Selector;
