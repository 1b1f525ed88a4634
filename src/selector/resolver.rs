use crate::catalog::{Catalog, FileRef};
use crate::selector::SelectionState;

/// Files for the deepest selected level that exists, walking up one level at
/// a time when a key is unset or unknown. Lists are never merged across levels.
pub fn resolve_files<'c>(catalog: &'c Catalog, state: &SelectionState) -> &'c [FileRef] {
    let Some(parent) = state.parent(catalog) else {
        return &[];
    };
    let Some(child) = state.child(catalog) else {
        return parent.files();
    };
    match state.grandchild(catalog) {
        Some(grandchild) => grandchild.files(),
        None => child.files(),
    }
}
