use std::sync::Arc;

use tracing::debug;

use crate::catalog::{Catalog, FileRef, Node};
use crate::selector::{Operation, SelectionError, SelectionLevel, SelectionState, resolve_files};

/// Holds the active catalog and the current selection. The operations below
/// are the only way to change either; everything else is derived on read.
#[derive(Debug, Clone)]
pub struct Selector {
    catalog: Arc<Catalog>,
    state: SelectionState,
}

impl Selector {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let state = SelectionState::seed(&catalog);
        debug!("Seeded selection: {:?}", state);
        Self { catalog, state }
    }

    /// Applies `operation` as a whole or not at all.
    pub fn apply(&mut self, operation: Operation) -> Result<(), SelectionError> {
        let next = self.state.transition(&self.catalog, &operation)?;
        debug!("Applied {}: {:?} -> {:?}", operation, self.state, next);

        if let Operation::SwitchCatalog(catalog) = operation {
            self.catalog = catalog;
        }
        self.state = next;
        Ok(())
    }

    pub fn select_parent(&mut self, key: impl Into<String>) -> Result<(), SelectionError> {
        self.apply(Operation::SelectParent(key.into()))
    }

    pub fn select_child(&mut self, key: impl Into<String>) -> Result<(), SelectionError> {
        self.apply(Operation::SelectChild(key.into()))
    }

    pub fn select_grandchild(&mut self, key: impl Into<String>) -> Result<(), SelectionError> {
        self.apply(Operation::SelectGrandchild(key.into()))
    }

    pub fn switch_catalog(&mut self, catalog: Arc<Catalog>) {
        self.state = SelectionState::seed(&catalog);
        self.catalog = catalog;
        debug!("Switched catalog, reseeded selection: {:?}", self.state);
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn selected_key(&self, level: SelectionLevel) -> Option<&str> {
        self.state.key(level)
    }

    pub fn selected_node(&self, level: SelectionLevel) -> Option<&Node> {
        match level {
            SelectionLevel::Parent => self.state.parent(&self.catalog),
            SelectionLevel::Child => self.state.child(&self.catalog),
            SelectionLevel::Grandchild => self.state.grandchild(&self.catalog),
        }
    }

    pub fn parent_options(&self) -> impl Iterator<Item = &Node> {
        self.catalog.parents()
    }

    pub fn child_options(&self) -> impl Iterator<Item = &Node> {
        self.state
            .parent(&self.catalog)
            .into_iter()
            .flat_map(|node| node.children())
    }

    pub fn grandchild_options(&self) -> impl Iterator<Item = &Node> {
        self.state
            .child(&self.catalog)
            .into_iter()
            .flat_map(|node| node.children())
    }

    pub fn options(&self, level: SelectionLevel) -> Vec<&Node> {
        match level {
            SelectionLevel::Parent => self.parent_options().collect(),
            SelectionLevel::Child => self.child_options().collect(),
            SelectionLevel::Grandchild => self.grandchild_options().collect(),
        }
    }

    /// The parent level is always offered; the lower ones only when they have
    /// something to choose from.
    pub fn is_level_visible(&self, level: SelectionLevel) -> bool {
        match level {
            SelectionLevel::Parent => true,
            SelectionLevel::Child => self.child_options().next().is_some(),
            SelectionLevel::Grandchild => self.grandchild_options().next().is_some(),
        }
    }

    pub fn resolved_files(&self) -> &[FileRef] {
        resolve_files(&self.catalog, &self.state)
    }
}
