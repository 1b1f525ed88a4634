use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;

use crate::application::{Report, RuntimeConfig};
use crate::catalog::{CatalogRegistry, CatalogRegistryCreationError};
use crate::session::{ConnectSession, SessionError};

pub struct Application;

impl Application {
    pub async fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        let registry = match &app_config.catalogs {
            Some(path) => CatalogRegistry::from_path(path.clone()).await,
            None => CatalogRegistry::read(&app_config.root).await,
        }
        .context(CatalogRegistrySnafu)?;
        debug!(
            "Loaded catalogs: {:?}",
            registry.names().collect::<Vec<_>>()
        );

        let session = Self::build_session(registry, &app_config)?;
        print!("{}", Report::from_session(&session));

        Ok(())
    }

    /// Replays the requested catalog, pooler toggle and selections, in that
    /// order, on a fresh session.
    pub fn build_session(
        registry: CatalogRegistry,
        app_config: &RuntimeConfig,
    ) -> Result<ConnectSession, ApplicationError> {
        let mut session = ConnectSession::new(registry);

        if let Some(name) = &app_config.catalog {
            session.switch_catalog(name).context(SessionSnafu)?;
        }
        session.set_connection_pooler(app_config.pooler);

        for (level, key) in app_config.selections() {
            debug!("Selecting {} '{}'", level, key);
            session.select(level, key).context(SessionSnafu)?;
        }

        Ok(session)
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading catalogs"))]
    CatalogRegistryError { source: CatalogRegistryCreationError },
    #[snafu(display("Critical failure encountered while applying selections"))]
    SessionError { source: SessionError },
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use rstest::*;
    use tempfile::TempDir;

    use super::*;
    use crate::selector::{SelectionError, SelectionLevel};

    const CATALOGS: &str = r#"
catalogs:
  frameworks:
    nextjs:
      children:
        app:
          children:
            supabasejs:
              files:
                - path: nextjs/app/supabasejs
        pages:
          files:
            - path: nextjs/pages
  orms:
    prisma:
      children:
        pooled:
          files:
            - path: prisma/pooled
    drizzle:
      files:
        - path: drizzle/env
"#;

    #[fixture]
    fn registry() -> CatalogRegistry {
        CATALOGS.try_into().expect("Failed to parse registry")
    }

    fn resolved_paths(session: &ConnectSession) -> Vec<String> {
        session
            .content_tabs()
            .into_iter()
            .map(|tab| tab.path)
            .collect()
    }

    #[rstest]
    fn build_session_replays_selections_in_order(registry: CatalogRegistry) {
        let config = RuntimeConfig {
            catalog: Some("orms".into()),
            parent: Some("drizzle".into()),
            pooler: true,
            ..Default::default()
        };

        let session = Application::build_session(registry, &config).expect("valid selections");

        assert_eq!(session.active_catalog(), Some("orms"));
        assert!(session.uses_connection_pooler());
        assert_eq!(resolved_paths(&session), ["drizzle/env"]);
    }

    #[rstest]
    fn build_session_without_requests_uses_seed(registry: CatalogRegistry) {
        let session =
            Application::build_session(registry, &RuntimeConfig::default()).expect("no selections");

        assert_eq!(session.active_catalog(), Some("frameworks"));
        assert_eq!(resolved_paths(&session), ["nextjs/app/supabasejs"]);
    }

    #[rstest]
    fn build_session_reports_stale_child(registry: CatalogRegistry) {
        // `pooled` belongs to prisma, which is no longer selected once the
        // parent switches to drizzle.
        let config = RuntimeConfig {
            catalog: Some("orms".into()),
            parent: Some("drizzle".into()),
            child: Some("pooled".into()),
            ..Default::default()
        };

        let error = Application::build_session(registry, &config).expect_err("stale child");

        assert!(matches!(
            error,
            ApplicationError::SessionError {
                source: SessionError::Selection {
                    source: SelectionError::InvalidSelection {
                        level: SelectionLevel::Child,
                        ..
                    }
                }
            }
        ));
    }

    #[rstest]
    fn build_session_reports_unknown_catalog(registry: CatalogRegistry) {
        let config = RuntimeConfig {
            catalog: Some("graphql".into()),
            ..Default::default()
        };

        let error = Application::build_session(registry, &config).expect_err("unknown catalog");

        assert!(matches!(
            error,
            ApplicationError::SessionError {
                source: SessionError::UnknownCatalog { .. }
            }
        ));
    }

    #[compio::test]
    async fn run_reads_catalog_file_from_root() {
        let root = TempDir::new().expect("Failed to create temp directory");
        std::fs::write(root.path().join("connect.yaml"), CATALOGS)
            .expect("Failed to write catalog file");

        let config = RuntimeConfig {
            root: root.path().to_path_buf(),
            parent: Some("nextjs".into()),
            child: Some("pages".into()),
            ..Default::default()
        };

        assert!(Application::run(config).await.is_ok());
    }

    #[compio::test]
    async fn run_fails_on_missing_catalog_file() {
        let config = RuntimeConfig {
            catalogs: Some(PathBuf::from("/this/path/does/not/exist.yaml")),
            ..Default::default()
        };

        let result = Application::run(config).await;

        assert!(matches!(
            result,
            Err(ApplicationError::CatalogRegistryError {
                source: CatalogRegistryCreationError::ReadError { .. }
            })
        ));
    }
}
