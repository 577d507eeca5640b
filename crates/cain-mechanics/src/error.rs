//! Error types for the mechanics engine.

/// Errors that can occur during mechanics operations.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A dice pool configuration is invalid.
    #[error("invalid pool: {0}")]
    InvalidPool(String),

    /// A dice formula could not be parsed.
    #[error("invalid formula '{formula}': {reason}")]
    InvalidFormula {
        /// The text that failed to parse.
        formula: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A stat referenced by an action does not exist on the character.
    #[error("unknown stat: {0}")]
    UnknownStat(String),

    /// A table roll was attempted on an empty table.
    #[error("table '{0}' has no entries")]
    EmptyTable(String),

    /// Every entry of a table is already held, so nothing new can be rolled.
    #[error("every entry of table '{0}' is already taken")]
    TableExhausted(String),

    /// A named table entry does not exist.
    #[error("no entry '{entry}' in table '{table}'")]
    UnknownEntry {
        /// The table searched.
        table: String,
        /// The entry asked for.
        entry: String,
    },

    /// A host collaborator (stat store, message sink) reported a failure.
    #[error("host error: {0}")]
    Host(String),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
