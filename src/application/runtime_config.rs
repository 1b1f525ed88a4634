use std::path::PathBuf;

use crate::cli::Cli;
use crate::selector::SelectionLevel;

#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub root: PathBuf,
    pub catalogs: Option<PathBuf>,
    pub catalog: Option<String>,
    pub parent: Option<String>,
    pub child: Option<String>,
    pub grandchild: Option<String>,
    pub pooler: bool,
}

impl RuntimeConfig {
    /// Requested selections, outermost level first.
    pub fn selections(&self) -> impl Iterator<Item = (SelectionLevel, &str)> {
        [
            (SelectionLevel::Parent, self.parent.as_deref()),
            (SelectionLevel::Child, self.child.as_deref()),
            (SelectionLevel::Grandchild, self.grandchild.as_deref()),
        ]
        .into_iter()
        .filter_map(|(level, key)| key.map(|key| (level, key)))
    }
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            root: cli.root,
            catalogs: cli.catalogs,
            catalog: cli.catalog,
            parent: cli.parent,
            child: cli.child,
            grandchild: cli.grandchild,
            pooler: cli.pooler,
        }
    }
}
