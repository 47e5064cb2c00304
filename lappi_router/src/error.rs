use thiserror::Error;

/// Errors raised while building a [`crate::RouteTable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// A catch-all entry is followed by other entries and would shadow them.
    #[error("catch-all route '{pattern}' must be the last entry")]
    CatchAllNotLast {
        /// Offending pattern.
        pattern: String,
    },

    /// Catch-all entries are only allowed at the top level.
    #[error("catch-all route '{pattern}' cannot be nested")]
    NestedCatchAll {
        /// Full pattern of the nested entry.
        pattern: String,
    },

    /// The matcher rejected the pattern.
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// Full pattern as it was inserted.
        pattern: String,
        /// Matcher error message.
        reason: String,
    },

    /// The entry has no view and no children, so nothing could ever render.
    #[error("route '{pattern}' has neither a view nor children")]
    EmptyEntry {
        /// Full pattern of the entry.
        pattern: String,
    },
}
