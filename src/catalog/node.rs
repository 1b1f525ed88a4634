use std::hash::{Hash, Hasher};

use derive_more::Display;
use hashlink::LinkedHashMap;
use saphyr::{Scalar, Yaml};
use tracing::warn;

/// A single content file offered for a selection. Two references are the same
/// file when their paths match, regardless of the display labels.
#[derive(Debug, Clone, Eq, Display)]
#[display("{display_path}")]
pub struct FileRef {
    path: String,
    name: String,
    display_path: String,
}

impl FileRef {
    pub fn new(
        path: impl Into<String>,
        name: impl Into<String>,
        display_path: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            display_path: display_path.into(),
        }
    }

    /// Parses a file entry. `name` falls back to the last path segment and
    /// `displayPath` falls back to the name.
    pub fn from_file_yaml(owner_key: &str, file_data: &LinkedHashMap<Yaml, Yaml>) -> Option<Self> {
        let Some(path) = file_data
            .get(&Yaml::Value(Scalar::String("path".into())))
            .and_then(|v| v.as_str())
        else {
            warn!("File entry of '{}' has no path. Skipping.", owner_key);
            return None;
        };

        let name = file_data
            .get(&Yaml::Value(Scalar::String("name".into())))
            .and_then(|v| v.as_str())
            .unwrap_or_else(|| path.rsplit('/').next().unwrap_or(path))
            .to_string();

        let display_path = file_data
            .get(&Yaml::Value(Scalar::String("displayPath".into())))
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| name.clone());

        Some(FileRef {
            path: path.to_string(),
            name,
            display_path,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_path(&self) -> &str {
        &self.display_path
    }
}

impl PartialEq for FileRef {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Hash for FileRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

/// An entry of the catalog tree. The same type serves parents, children and
/// grandchildren; leaves simply have no children.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    key: String,
    label: String,
    children: LinkedHashMap<String, Node>,
    files: Vec<FileRef>,
}

impl Node {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            label: key.clone(),
            key,
            children: LinkedHashMap::new(),
            files: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Appends a child. A child with an already used key replaces the old one
    /// but keeps its position.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.replace(child.key.clone(), child);
        self
    }

    pub fn with_file(mut self, file: FileRef) -> Self {
        self.files.push(file);
        self
    }

    pub fn from_node_yaml(node_key: &str, node_data: &LinkedHashMap<Yaml, Yaml>) -> Self {
        let label = node_data
            .get(&Yaml::Value(Scalar::String("label".into())))
            .and_then(|v| v.as_str())
            .unwrap_or(node_key)
            .to_string();

        let files = node_data
            .get(&Yaml::Value(Scalar::String("files".into())))
            .and_then(|v| v.as_sequence())
            .map(|seq| {
                seq.iter()
                    .filter_map(|item| item.as_mapping())
                    .filter_map(|file_data| FileRef::from_file_yaml(node_key, file_data))
                    .collect()
            })
            .unwrap_or_default();

        let children = node_data
            .get(&Yaml::Value(Scalar::String("children".into())))
            .and_then(|v| v.as_mapping())
            .map(nodes_from_yaml)
            .unwrap_or_default();

        Node {
            key: node_key.to_string(),
            label,
            children,
            files,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn files(&self) -> &[FileRef] {
        &self.files
    }

    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.values()
    }

    pub fn child(&self, key: &str) -> Option<&Node> {
        self.children.get(key)
    }

    pub fn first_child(&self) -> Option<&Node> {
        self.children.values().next()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Builds an ordered, keyed set of nodes from a YAML mapping of
/// `key: { label, files, children }` entries. Integer keys are taken as their
/// decimal text and a key without a body becomes a bare node; anything else is
/// skipped.
pub fn nodes_from_yaml(mapping: &LinkedHashMap<Yaml, Yaml>) -> LinkedHashMap<String, Node> {
    mapping
        .iter()
        .filter_map(|(key, value)| {
            let node_key = match key {
                Yaml::Value(Scalar::String(node_key)) => node_key.to_string(),
                Yaml::Value(Scalar::Integer(number)) => number.to_string(),
                _ => {
                    warn!("Skipping catalog entry with unsupported key: {:?}", key);
                    return None;
                }
            };
            match value {
                Yaml::Mapping(node_data) => Some(Node::from_node_yaml(&node_key, node_data)),
                Yaml::Value(Scalar::Null) => Some(Node::new(node_key)),
                _ => {
                    warn!("Skipping catalog entry '{}': expected a map", node_key);
                    None
                }
            }
        })
        .map(|node| (node.key.clone(), node))
        .collect()
}
