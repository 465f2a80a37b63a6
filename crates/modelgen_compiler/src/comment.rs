//! Documentation attached to generated query entry points.

use crate::identifiers::QueryKind;

/// Singular and plural documentation for one operation on one model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryComment {
    /// Documentation of the singular entry point.
    pub singular: String,
    /// Documentation of the plural entry point.
    pub plural: String,
}

/// Describes `query` on the model called `model_name`.
#[must_use]
pub fn query_comment(model_name: &str, query: QueryKind) -> QueryComment {
    let verb = query.readable();
    QueryComment {
        singular: format!("{verb} a single record of the {model_name} model"),
        plural: format!("{verb} multiple records of the {model_name} model"),
    }
}
