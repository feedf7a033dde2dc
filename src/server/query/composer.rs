//! Turns filters and order directives into a single SELECT over one entity.
//!
//! Every relation needed by a filter or a sort column is LEFT JOINed exactly once under a
//! per-relation alias. As soon as the query aggregates, or joins a relation that can
//! multiply base rows, it is grouped by every base column so each base row appears once.
//! The primary key is always appended as the final sort key so that pages are stable.

use sea_orm::{
    sea_query::{Expr, Func},
    EntityTrait, JoinType, Order, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::{
    error::catalog::CatalogError,
    query::{
        classifier::{classify, join_alias},
        descriptor::EntityDescriptor,
        filter::FilterPredicate,
        order::{OrderDirective, SortColumn},
    },
};

/// Composed query together with the shape decisions taken while building it.
pub struct ComposedQuery<E: EntityTrait> {
    pub select: Select<E>,
    /// Relation keys joined, in the order they were first needed.
    pub joins: Vec<&'static str>,
    /// Whether the query is grouped by the base row.
    pub grouped: bool,
}

/// Builds selects for one entity from its descriptor.
pub struct QueryComposer<'d, E: EntityTrait, C: SortColumn> {
    descriptor: &'d EntityDescriptor<E, C>,
}

impl<'d, E: EntityTrait, C: SortColumn> QueryComposer<'d, E, C> {
    pub fn new(descriptor: &'d EntityDescriptor<E, C>) -> Self {
        Self { descriptor }
    }

    /// Composes the row-fetching query for the given filters and ordering.
    ///
    /// # Arguments
    /// - `filters` - Predicates combined with AND
    /// - `orders` - Sort directives, applied in the given order before the primary key
    ///
    /// # Returns
    /// - `Ok(ComposedQuery)` - Query ready for pagination and execution
    /// - `Err(CatalogError)` - A filter or column refers to a relation the descriptor lacks
    pub fn compose(
        &self,
        filters: &[FilterPredicate],
        orders: &[OrderDirective<C>],
    ) -> Result<ComposedQuery<E>, CatalogError> {
        let table = self.descriptor.table();
        let mut joins = Vec::new();
        let mut select = self.filtered(E::find(), filters, &mut joins)?;

        let mut order_by = Vec::with_capacity(orders.len());
        let mut group_extra = Vec::new();
        let mut aggregated = false;
        for directive in orders {
            let classification = classify(self.descriptor, directive.column)?;

            if let Some(key) = classification.join {
                select = self.join(select, &mut joins, key)?;
            }
            aggregated |= classification.aggregate;
            group_extra.extend(classification.group_by);
            order_by.push((classification.expr, directive.direction));
        }

        let grouped = aggregated || joins.iter().any(|key| self.descriptor.fans_out(key));
        if grouped {
            for column in self.descriptor.columns() {
                select = select.group_by(Expr::col((table.clone(), column.clone())));
            }
            for expr in group_extra {
                select = select.group_by(expr);
            }
        }

        for (expr, direction) in order_by {
            select = select.order_by(expr, Order::from(direction));
        }
        select = select.order_by(
            Expr::col((table.clone(), self.descriptor.primary_key().clone())),
            Order::Asc,
        );

        Ok(ComposedQuery {
            select,
            joins,
            grouped,
        })
    }

    /// Composes a query returning the number of distinct base rows matching `filters`.
    ///
    /// Only the joins the filters need are added, and no ordering or grouping is applied, so
    /// the count matches the number of rows an unpaginated fetch would return.
    pub fn compose_count(&self, filters: &[FilterPredicate]) -> Result<Select<E>, CatalogError> {
        let mut joins = Vec::new();
        let select = self.filtered(E::find(), filters, &mut joins)?;

        let key = Expr::col((
            self.descriptor.table().clone(),
            self.descriptor.primary_key().clone(),
        ));

        Ok(select
            .select_only()
            .column_as(Expr::from(Func::count_distinct(key)), "count"))
    }

    fn filtered(
        &self,
        mut select: Select<E>,
        filters: &[FilterPredicate],
        joins: &mut Vec<&'static str>,
    ) -> Result<Select<E>, CatalogError> {
        for filter in filters {
            if let Some(key) = filter.relation() {
                select = self.join(select, joins, key)?;
            }
            select = select.filter(filter.to_expr(self.descriptor.table()));
        }

        Ok(select)
    }

    fn join(
        &self,
        select: Select<E>,
        joins: &mut Vec<&'static str>,
        key: &'static str,
    ) -> Result<Select<E>, CatalogError> {
        if joins.contains(&key) {
            return Ok(select);
        }

        let def = self
            .descriptor
            .relation(key)
            .ok_or(CatalogError::UnknownRelation {
                entity: self.descriptor.name(),
                relation: key,
            })?
            .clone();

        joins.push(key);

        Ok(select.join_as(JoinType::LeftJoin, def, join_alias(key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::query::{
        catalog::{Catalog, GameOrderColumn, SaleOrderColumn},
        order::parse_order,
    };
    use entity::{company, game, user};
    use sea_orm::{DbBackend, QueryTrait};

    fn sql<E: EntityTrait>(composed: &ComposedQuery<E>) -> String {
        composed.select.build(DbBackend::Sqlite).to_string()
    }

    #[test]
    fn scalar_ordering_needs_no_join_or_grouping() {
        let catalog = Catalog::build().unwrap();
        let orders = parse_order::<GameOrderColumn>(Some("-released_at")).unwrap();

        let composed = QueryComposer::new(catalog.games())
            .compose(&[], &orders)
            .unwrap();

        assert!(composed.joins.is_empty());
        assert!(!composed.grouped);
        assert!(!sql(&composed).contains("GROUP BY"));
    }

    #[test]
    fn to_many_ordering_counts_distinct_and_groups() {
        let catalog = Catalog::build().unwrap();
        let orders = parse_order::<GameOrderColumn>(Some("-platforms")).unwrap();

        let composed = QueryComposer::new(catalog.games())
            .compose(&[], &orders)
            .unwrap();
        let sql = sql(&composed);

        assert_eq!(composed.joins, vec!["platforms"]);
        assert!(composed.grouped);
        assert!(sql.contains("LEFT JOIN"));
        assert!(sql.contains("COUNT(DISTINCT"));
        assert!(sql.contains("GROUP BY"));
    }

    #[test]
    fn shared_relation_is_joined_once() {
        let catalog = Catalog::build().unwrap();
        let orders = parse_order::<GameOrderColumn>(Some("created_by_user,-platforms")).unwrap();
        let filters = [FilterPredicate::related_contains(
            "created_by_user",
            user::Column::Username,
            "ann",
        )];

        let composed = QueryComposer::new(catalog.games())
            .compose(&filters, &orders)
            .unwrap();

        assert_eq!(composed.joins, vec!["created_by_user", "platforms"]);
        assert_eq!(sql(&composed).matches("LEFT JOIN").count(), 2);
    }

    #[test]
    fn multiple_to_many_orderings_join_each_relation() {
        let catalog = Catalog::build().unwrap();
        let orders = parse_order::<GameOrderColumn>(Some("-platforms,genres,-sales")).unwrap();

        let composed = QueryComposer::new(catalog.games())
            .compose(&[], &orders)
            .unwrap();

        assert_eq!(composed.joins, vec!["platforms", "genres", "sales"]);
        assert!(composed.grouped);
    }

    #[test]
    fn to_one_ordering_does_not_group() {
        let catalog = Catalog::build().unwrap();
        let orders = parse_order::<SaleOrderColumn>(Some("game,-platform")).unwrap();

        let composed = QueryComposer::new(catalog.sales())
            .compose(&[], &orders)
            .unwrap();

        assert_eq!(composed.joins, vec!["game", "platform"]);
        assert!(!composed.grouped);
    }

    #[test]
    fn primary_key_is_final_sort_key() {
        let catalog = Catalog::build().unwrap();
        let orders = parse_order::<GameOrderColumn>(Some("title")).unwrap();

        let composed = QueryComposer::new(catalog.games())
            .compose(&[], &orders)
            .unwrap();
        let sql = sql(&composed);

        let order_clause = &sql[sql.find("ORDER BY").unwrap()..];
        assert!(order_clause.ends_with(r#""game"."id" ASC"#));
    }

    #[test]
    fn count_query_uses_filter_joins_only() {
        let catalog = Catalog::build().unwrap();
        let filters = [
            FilterPredicate::contains(game::Column::Title, "half"),
            FilterPredicate::related_contains(
                "created_by_company",
                company::Column::Title,
                "valve",
            ),
        ];

        let select = QueryComposer::new(catalog.games())
            .compose_count(&filters)
            .unwrap();
        let sql = select.build(DbBackend::Sqlite).to_string();

        assert_eq!(sql.matches("LEFT JOIN").count(), 1);
        assert!(sql.contains("COUNT(DISTINCT"));
        assert!(!sql.contains("ORDER BY"));
        assert!(!sql.contains("GROUP BY"));
    }

    #[test]
    fn unknown_filter_relation_is_rejected() {
        let catalog = Catalog::build().unwrap();
        let filters = [FilterPredicate::related_contains(
            "publisher",
            company::Column::Title,
            "x",
        )];

        let result = QueryComposer::new(catalog.games()).compose(&filters, &[]);

        assert!(matches!(
            result.err(),
            Some(CatalogError::UnknownRelation {
                relation: "publisher",
                ..
            })
        ));
    }
}
