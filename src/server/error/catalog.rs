use thiserror::Error;

/// Inconsistencies between an entity's sortable columns and its schema.
///
/// These are programming errors detected when the query catalog is built at startup.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{entity}: sortable column '{column}' has no descriptor")]
    UnmappedColumn {
        entity: &'static str,
        column: &'static str,
    },

    #[error("{entity}: sortable column '{column}' is described more than once")]
    DuplicateColumn {
        entity: &'static str,
        column: &'static str,
    },

    #[error("{entity}: relation '{relation}' is not registered")]
    UnknownRelation {
        entity: &'static str,
        relation: &'static str,
    },

    #[error("{entity}: relation '{relation}' is registered more than once")]
    DuplicateRelation {
        entity: &'static str,
        relation: &'static str,
    },

    /// A to-many column points at a to-one relation or the other way round.
    #[error("{entity}: column '{column}' does not match the cardinality of relation '{relation}'")]
    RelationKindMismatch {
        entity: &'static str,
        column: &'static str,
        relation: &'static str,
    },
}
