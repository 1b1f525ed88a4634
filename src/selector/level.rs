use derive_more::Display;

/// One of the three dependent selection levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum SelectionLevel {
    #[display("parent")]
    Parent,
    #[display("child")]
    Child,
    #[display("grandchild")]
    Grandchild,
}

impl SelectionLevel {
    pub const ALL: [SelectionLevel; 3] = [
        SelectionLevel::Parent,
        SelectionLevel::Child,
        SelectionLevel::Grandchild,
    ];

    /// Caption shown next to the level's dropdown.
    pub fn caption(&self) -> &'static str {
        match self {
            SelectionLevel::Parent => "Framework",
            SelectionLevel::Child => "Using",
            SelectionLevel::Grandchild => "With",
        }
    }
}
