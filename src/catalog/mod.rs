//! Catalog data: the three-level taxonomy of connection snippets and the
//! registry of named catalogs loaded from `connect.yaml`.

mod catalog;
mod catalog_registry;
mod node;

pub use catalog::Catalog;
pub use catalog_registry::{CatalogRegistry, CatalogRegistryCreationError};
pub use node::{FileRef, Node};
