use std::sync::Arc;

use derive_more::Display;

use crate::{catalog::Catalog, selector::SelectionLevel};

/// The only ways a selection can change.
#[derive(Debug, Clone, Display)]
pub enum Operation {
    #[display("select parent '{_0}'")]
    SelectParent(String),
    #[display("select child '{_0}'")]
    SelectChild(String),
    #[display("select grandchild '{_0}'")]
    SelectGrandchild(String),
    #[display("switch to a catalog with {} parents", _0.len())]
    SwitchCatalog(Arc<Catalog>),
}

impl Operation {
    pub fn select(level: SelectionLevel, key: impl Into<String>) -> Self {
        let key = key.into();
        match level {
            SelectionLevel::Parent => Operation::SelectParent(key),
            SelectionLevel::Child => Operation::SelectChild(key),
            SelectionLevel::Grandchild => Operation::SelectGrandchild(key),
        }
    }
}
