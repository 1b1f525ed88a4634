use snafu::prelude::*;

use crate::catalog::{Catalog, Node};
use crate::selector::selection_error::InvalidSelectionSnafu;
use crate::selector::{Operation, SelectionError, SelectionLevel};

/// Keys selected at each level. `None` means nothing is selectable there.
///
/// Every state produced by [`SelectionState::seed`] or
/// [`SelectionState::transition`] satisfies, against the catalog it was
/// derived from:
/// - the parent key names a parent, or the catalog is empty and it is `None`
/// - the child key names a child of that parent, or the parent has no children
/// - the grandchild key names a child of that child, or the child has no children
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    parent_key: Option<String>,
    child_key: Option<String>,
    grandchild_key: Option<String>,
}

impl SelectionState {
    /// First parent, its first child and that child's first child.
    pub fn seed(catalog: &Catalog) -> Self {
        catalog
            .first_parent()
            .map(Self::seeded_from)
            .unwrap_or_default()
    }

    fn seeded_from(parent: &Node) -> Self {
        let child = parent.first_child();
        SelectionState {
            parent_key: Some(parent.key().to_string()),
            child_key: child.map(|child| child.key().to_string()),
            grandchild_key: child
                .and_then(Node::first_child)
                .map(|grandchild| grandchild.key().to_string()),
        }
    }

    /// Computes the state following `operation` without touching `self`.
    ///
    /// `catalog` is the catalog the current state was derived from. A catalog
    /// switch ignores it and seeds from the new one.
    pub fn transition(
        &self,
        catalog: &Catalog,
        operation: &Operation,
    ) -> Result<Self, SelectionError> {
        match operation {
            Operation::SelectParent(key) => {
                let parent = catalog.parent(key).context(InvalidSelectionSnafu {
                    level: SelectionLevel::Parent,
                    key,
                })?;
                Ok(Self::seeded_from(parent))
            }
            Operation::SelectChild(key) => {
                let child = self
                    .parent(catalog)
                    .and_then(|parent| parent.child(key))
                    .context(InvalidSelectionSnafu {
                        level: SelectionLevel::Child,
                        key,
                    })?;
                Ok(SelectionState {
                    parent_key: self.parent_key.clone(),
                    child_key: Some(key.clone()),
                    grandchild_key: child
                        .first_child()
                        .map(|grandchild| grandchild.key().to_string()),
                })
            }
            Operation::SelectGrandchild(key) => {
                self.child(catalog)
                    .and_then(|child| child.child(key))
                    .context(InvalidSelectionSnafu {
                        level: SelectionLevel::Grandchild,
                        key,
                    })?;
                Ok(SelectionState {
                    grandchild_key: Some(key.clone()),
                    ..self.clone()
                })
            }
            Operation::SwitchCatalog(new_catalog) => Ok(Self::seed(new_catalog)),
        }
    }

    pub fn parent_key(&self) -> Option<&str> {
        self.parent_key.as_deref()
    }

    pub fn child_key(&self) -> Option<&str> {
        self.child_key.as_deref()
    }

    pub fn grandchild_key(&self) -> Option<&str> {
        self.grandchild_key.as_deref()
    }

    pub fn key(&self, level: SelectionLevel) -> Option<&str> {
        match level {
            SelectionLevel::Parent => self.parent_key(),
            SelectionLevel::Child => self.child_key(),
            SelectionLevel::Grandchild => self.grandchild_key(),
        }
    }

    pub fn parent<'c>(&self, catalog: &'c Catalog) -> Option<&'c Node> {
        catalog.parent(self.parent_key.as_deref()?)
    }

    pub fn child<'c>(&self, catalog: &'c Catalog) -> Option<&'c Node> {
        self.parent(catalog)?.child(self.child_key.as_deref()?)
    }

    pub fn grandchild<'c>(&self, catalog: &'c Catalog) -> Option<&'c Node> {
        self.child(catalog)?.child(self.grandchild_key.as_deref()?)
    }

    /// Whether every selected key still names a node of `catalog` and no
    /// level is left empty while it has options.
    pub fn is_consistent_with(&self, catalog: &Catalog) -> bool {
        let parent_ok = match self.parent(catalog) {
            Some(_) => true,
            None => self.parent_key.is_none() && catalog.is_empty(),
        };
        let child_ok = match self.child(catalog) {
            Some(_) => true,
            None => {
                self.child_key.is_none()
                    && !self.parent(catalog).is_some_and(Node::has_children)
            }
        };
        let grandchild_ok = match self.grandchild(catalog) {
            Some(_) => true,
            None => {
                self.grandchild_key.is_none()
                    && !self.child(catalog).is_some_and(Node::has_children)
            }
        };
        parent_ok && child_ok && grandchild_ok
    }
}
