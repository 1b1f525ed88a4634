use snafu::Snafu;

use crate::selector::SelectionLevel;

/// Raised when a key is not among the options currently offered at its level.
/// The state is never modified when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SelectionError {
    #[snafu(display("'{}' is not a valid {} selection", key, level))]
    InvalidSelection { level: SelectionLevel, key: String },
}
