use hashlink::LinkedHashMap;
use saphyr::Yaml;

use crate::catalog::node::{Node, nodes_from_yaml};

/// The ordered set of top-level (parent) nodes a selection narrows down.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    parents: LinkedHashMap<String, Node>,
}

impl Catalog {
    pub fn new(parents: impl IntoIterator<Item = Node>) -> Self {
        let mut catalog = Catalog::default();
        for parent in parents {
            catalog.parents.replace(parent.key().to_string(), parent);
        }
        catalog
    }

    pub fn from_catalog_yaml(catalog_data: &LinkedHashMap<Yaml, Yaml>) -> Self {
        Catalog {
            parents: nodes_from_yaml(catalog_data),
        }
    }

    pub fn parents(&self) -> impl Iterator<Item = &Node> {
        self.parents.values()
    }

    pub fn parent(&self, key: &str) -> Option<&Node> {
        self.parents.get(key)
    }

    pub fn first_parent(&self) -> Option<&Node> {
        self.parents.values().next()
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_parent_order() {
        let catalog = Catalog::new([Node::new("nextjs"), Node::new("remix"), Node::new("astro")]);

        let keys: Vec<_> = catalog.parents().map(Node::key).collect();
        assert_eq!(keys, ["nextjs", "remix", "astro"]);
        assert_eq!(catalog.first_parent().map(Node::key), Some("nextjs"));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn parent_lookup_by_key() {
        let catalog = Catalog::new([Node::new("prisma").with_label("Prisma")]);

        assert_eq!(catalog.parent("prisma").map(Node::label), Some("Prisma"));
        assert!(catalog.parent("drizzle").is_none());
    }

    #[test]
    fn default_catalog_is_empty() {
        let catalog = Catalog::default();

        assert!(catalog.is_empty());
        assert!(catalog.first_parent().is_none());
        assert_eq!(catalog.parents().count(), 0);
    }
}
