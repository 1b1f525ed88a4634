use derive_more::Display;

use crate::catalog::FileRef;

/// One tab of the content panel: a resolved file plus whether its snippet
/// should be shown with the connection pooler settings.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{display_path}")]
pub struct ContentTab {
    pub path: String,
    pub name: String,
    pub display_path: String,
    pub pooler: bool,
}

impl ContentTab {
    pub fn from_file(file: &FileRef, pooler: bool) -> Self {
        Self {
            path: file.path().to_string(),
            name: file.name().to_string(),
            display_path: file.display_path().to_string(),
            pooler,
        }
    }
}
