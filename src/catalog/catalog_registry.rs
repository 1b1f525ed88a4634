use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use compio::fs;
use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::{debug, warn};

use crate::catalog::Catalog;

const CATALOG_FILE_NAME: &str = "connect.yaml";

fn get_catalog_file_path(root: &Path) -> PathBuf {
    root.join(CATALOG_FILE_NAME)
}

/// Named catalogs (e.g. `frameworks`, `orms`) in declaration order.
#[derive(Debug, Clone, Default)]
pub struct CatalogRegistry {
    catalogs: LinkedHashMap<String, Arc<Catalog>>,
}

impl CatalogRegistry {
    pub async fn read(root: &Path) -> Result<Self, CatalogRegistryCreationError> {
        Self::from_path(get_catalog_file_path(root)).await
    }

    pub async fn from_path(path: PathBuf) -> Result<Self, CatalogRegistryCreationError> {
        debug!("Reading catalog file: {}", path.display());
        let bytes = fs::read(&path).await.context(ReadSnafu {
            file_path: path.display().to_string(),
        })?;
        debug!("Successfully read catalog file: {} bytes", bytes.len());

        let contents = String::from_utf8(bytes).context(EncodingSnafu {
            file_path: path.display().to_string(),
        })?;
        contents.as_str().try_into()
    }

    pub fn get(&self, name: &str) -> Option<Arc<Catalog>> {
        self.catalogs.get(name).cloned()
    }

    pub fn first(&self) -> Option<(&str, Arc<Catalog>)> {
        self.catalogs
            .iter()
            .next()
            .map(|(name, catalog)| (name.as_str(), catalog.clone()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.catalogs.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }

    fn parse_catalogs_from_yaml(
        top_level: &LinkedHashMap<Yaml, Yaml>,
    ) -> Result<LinkedHashMap<String, Arc<Catalog>>, CatalogRegistryCreationError> {
        let catalogs = top_level
            .get(&Yaml::Value(Scalar::String("catalogs".into())))
            .unwrap_or(&Yaml::Mapping(LinkedHashMap::new()))
            .as_mapping()
            .ok_or(CatalogRegistryCreationError::CatalogsNotMap)?
            .iter()
            .filter_map(|(key, value)| {
                if let Yaml::Value(Scalar::String(catalog_name)) = key {
                    if let Yaml::Mapping(catalog_data) = value {
                        return Some((catalog_name.to_string(), catalog_data));
                    }
                }
                warn!("Skipping invalid catalog: {:?}", key);
                None
            })
            .map(|(catalog_name, catalog_data)| {
                let catalog = Catalog::from_catalog_yaml(catalog_data);
                debug!(
                    "Parsed catalog '{}' with {} parents",
                    catalog_name,
                    catalog.len()
                );
                (catalog_name, Arc::new(catalog))
            })
            .collect();

        Ok(catalogs)
    }
}

impl TryFrom<&str> for CatalogRegistry {
    type Error = CatalogRegistryCreationError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let contents_vec = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let contents = contents_vec
            .first()
            .ok_or(CatalogRegistryCreationError::MalformedCatalogFile)?;

        let top_level = contents
            .as_mapping()
            .ok_or(CatalogRegistryCreationError::TopLevelNotMap)?;

        let catalogs = Self::parse_catalogs_from_yaml(top_level)?;
        Ok(CatalogRegistry { catalogs })
    }
}

#[derive(Debug, Snafu)]
pub enum CatalogRegistryCreationError {
    #[snafu(display("Failed to read the catalog file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("The catalog file is not valid UTF-8: {}", file_path))]
    EncodingError {
        file_path: String,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Failed to parse the catalog file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Improperly formatted catalog file"))]
    MalformedCatalogFile,
    #[snafu(display("Top level of the catalog file should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Catalogs section should be a map"))]
    CatalogsNotMap,
}
