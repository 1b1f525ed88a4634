use snafu::prelude::*;
use tracing::{debug, info};

use crate::catalog::CatalogRegistry;
use crate::selector::{Operation, SelectionError, SelectionLevel, Selector};
use crate::session::ContentTab;

/// A connect dialog session: the named catalogs on offer, which one is
/// active, the selection inside it and the connection pooler toggle.
#[derive(Debug, Clone)]
pub struct ConnectSession {
    registry: CatalogRegistry,
    active_catalog: Option<String>,
    selector: Selector,
    use_connection_pooler: bool,
}

impl ConnectSession {
    /// Starts on the first catalog of the registry, or on an empty selection
    /// if the registry has none.
    pub fn new(registry: CatalogRegistry) -> Self {
        let (active_catalog, catalog) = match registry.first() {
            Some((name, catalog)) => (Some(name.to_string()), catalog),
            None => (None, Default::default()),
        };
        info!(
            "Starting session on catalog {:?}",
            active_catalog.as_deref().unwrap_or("<none>")
        );

        Self {
            selector: Selector::new(catalog),
            registry,
            active_catalog,
            use_connection_pooler: false,
        }
    }

    pub fn switch_catalog(&mut self, name: &str) -> Result<(), SessionError> {
        let catalog = self
            .registry
            .get(name)
            .with_context(|| UnknownCatalogSnafu {
                name,
                available: self.registry.names().collect::<Vec<_>>().join(", "),
            })?;

        info!("Switching to catalog '{}'", name);
        self.selector.switch_catalog(catalog);
        self.active_catalog = Some(name.to_string());
        Ok(())
    }

    pub fn select(
        &mut self,
        level: SelectionLevel,
        key: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.selector
            .apply(Operation::select(level, key))
            .context(SelectionSnafu)
    }

    pub fn set_connection_pooler(&mut self, enabled: bool) {
        debug!("Connection pooler toggled: {}", enabled);
        self.use_connection_pooler = enabled;
    }

    pub fn uses_connection_pooler(&self) -> bool {
        self.use_connection_pooler
    }

    pub fn active_catalog(&self) -> Option<&str> {
        self.active_catalog.as_deref()
    }

    pub fn catalog_names(&self) -> impl Iterator<Item = &str> {
        self.registry.names()
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn content_tabs(&self) -> Vec<ContentTab> {
        self.selector
            .resolved_files()
            .iter()
            .map(|file| ContentTab::from_file(file, self.use_connection_pooler))
            .collect()
    }
}

#[derive(Debug, Snafu)]
pub enum SessionError {
    #[snafu(display("Unknown catalog '{}' (available: {})", name, available))]
    UnknownCatalog { name: String, available: String },
    #[snafu(display("Rejected selection"))]
    Selection { source: SelectionError },
}
