//! Maps sortable columns to ordering expressions.

use sea_orm::{
    sea_query::{Alias, Expr, Func},
    EntityTrait,
};

use crate::server::{
    error::catalog::CatalogError,
    query::{
        descriptor::{ColumnDescriptor, EntityDescriptor},
        order::SortColumn,
    },
};

/// Alias given to the join through relation `key`.
///
/// Every relation is joined at most once per query, so the key alone identifies the join.
pub fn join_alias(key: &str) -> Alias {
    Alias::new(format!("j_{key}"))
}

/// Expression and join requirements for ordering by one column.
pub struct Classification {
    /// Expression placed in ORDER BY.
    pub expr: Expr,
    /// Relation that must be joined for `expr` to resolve.
    pub join: Option<&'static str>,
    /// Whether `expr` is an aggregate that forces grouping by the base row.
    pub aggregate: bool,
    /// Non-aggregate expression from a joined table that must appear in GROUP BY when the
    /// query is grouped.
    pub group_by: Option<Expr>,
}

/// Resolves how `column` is evaluated for the entity described by `descriptor`.
///
/// # Returns
/// - `Ok(Classification)` - Ordering expression and the join it depends on
/// - `Err(CatalogError::UnmappedColumn)` - The descriptor has no entry for `column`
pub fn classify<E, C>(
    descriptor: &EntityDescriptor<E, C>,
    column: C,
) -> Result<Classification, CatalogError>
where
    E: EntityTrait,
    C: SortColumn,
{
    let entry = descriptor
        .order_column(column)
        .ok_or(CatalogError::UnmappedColumn {
            entity: descriptor.name(),
            column: column.as_str(),
        })?;

    let classification = match entry {
        ColumnDescriptor::Scalar { column } => Classification {
            expr: Expr::col((descriptor.table().clone(), column.clone())),
            join: None,
            aggregate: false,
            group_by: None,
        },
        ColumnDescriptor::ToManyCollection { relation, counted } => Classification {
            expr: Func::count_distinct(Expr::col((join_alias(relation), counted.clone()))).into(),
            join: Some(relation),
            aggregate: true,
            group_by: None,
        },
        ColumnDescriptor::ToOneRelation { relation, display } => {
            let expr = Expr::col((join_alias(relation), display.clone()));
            Classification {
                group_by: Some(expr.clone()),
                expr,
                join: Some(relation),
                aggregate: false,
            }
        }
    };

    Ok(classification)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::query::catalog::{Catalog, GameOrderColumn};

    #[test]
    fn scalar_needs_no_join() {
        let catalog = Catalog::build().unwrap();

        let classification = classify(catalog.games(), GameOrderColumn::Title).unwrap();

        assert!(classification.join.is_none());
        assert!(!classification.aggregate);
        assert!(classification.group_by.is_none());
    }

    #[test]
    fn to_many_counts_through_its_relation() {
        let catalog = Catalog::build().unwrap();

        let classification = classify(catalog.games(), GameOrderColumn::Platforms).unwrap();

        assert_eq!(classification.join, Some("platforms"));
        assert!(classification.aggregate);
    }

    #[test]
    fn to_one_orders_by_display_field() {
        let catalog = Catalog::build().unwrap();

        let classification =
            classify(catalog.games(), GameOrderColumn::CreatedByCompany).unwrap();

        assert_eq!(classification.join, Some("created_by_company"));
        assert!(!classification.aggregate);
        assert!(classification.group_by.is_some());
    }
}
