//! Filter predicates applied to list queries.

use sea_orm::{
    sea_query::{DynIden, Expr, ExprTrait, Func, IntoIden, LikeExpr},
    Value,
};

use crate::server::query::classifier::join_alias;

/// Comparison a predicate applies to its column.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOp {
    /// Case-insensitive substring match.
    Contains(String),
    Equals(Value),
    Gte(Value),
    Lte(Value),
}

/// Single condition on a column of the base table or of a table joined through a relation.
///
/// Predicates on the same query are combined with AND.
#[derive(Clone)]
pub struct FilterPredicate {
    relation: Option<&'static str>,
    column: DynIden,
    op: FilterOp,
}

impl FilterPredicate {
    /// Predicate on a column of the entity's own table.
    pub fn on(column: impl IntoIden, op: FilterOp) -> Self {
        Self {
            relation: None,
            column: column.into_iden(),
            op,
        }
    }

    /// Predicate on a column of the table reached through relation `key`.
    pub fn related(key: &'static str, column: impl IntoIden, op: FilterOp) -> Self {
        Self {
            relation: Some(key),
            column: column.into_iden(),
            op,
        }
    }

    pub fn contains(column: impl IntoIden, needle: impl Into<String>) -> Self {
        Self::on(column, FilterOp::Contains(needle.into()))
    }

    pub fn related_contains(
        key: &'static str,
        column: impl IntoIden,
        needle: impl Into<String>,
    ) -> Self {
        Self::related(key, column, FilterOp::Contains(needle.into()))
    }

    pub fn equals(column: impl IntoIden, value: impl Into<Value>) -> Self {
        Self::on(column, FilterOp::Equals(value.into()))
    }

    pub fn relation(&self) -> Option<&'static str> {
        self.relation
    }

    pub fn op(&self) -> &FilterOp {
        &self.op
    }

    /// Builds the condition against `base`, or against the join alias when the predicate
    /// targets a related table.
    pub(super) fn to_expr(&self, base: &DynIden) -> Expr {
        let column = match self.relation {
            Some(key) => Expr::col((join_alias(key), self.column.clone())),
            None => Expr::col((base.clone(), self.column.clone())),
        };

        match &self.op {
            FilterOp::Contains(needle) => Expr::from(Func::lower(column))
                .like(LikeExpr::new(contains_pattern(needle)).escape('\\')),
            FilterOp::Equals(value) => column.eq(value.clone()),
            FilterOp::Gte(value) => column.gte(value.clone()),
            FilterOp::Lte(value) => column.lte(value.clone()),
        }
    }
}

/// Lowercases `needle` and wraps it in wildcards, escaping LIKE metacharacters.
fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.to_lowercase().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
