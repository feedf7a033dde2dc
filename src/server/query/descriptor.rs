//! Per-entity metadata that drives query composition.
//!
//! An [`EntityDescriptor`] records, for one entity, its table, primary key, the named relations
//! that queries may join through, and how every sortable column is evaluated. Descriptors are
//! validated when they are built so that a mismatch between the allow-list and the schema fails
//! at startup instead of on the first request that touches it.

use std::{collections::HashMap, marker::PhantomData};

use sea_orm::{
    sea_query::{DynIden, IntoIden},
    EntityTrait, Iterable, RelationDef, RelationType,
};

use crate::server::{error::catalog::CatalogError, query::order::SortColumn};

/// How a sortable column is evaluated.
#[derive(Clone)]
pub enum ColumnDescriptor {
    /// Column stored on the entity's own table.
    Scalar { column: DynIden },
    /// Number of rows reachable through a to-many relation.
    ///
    /// `counted` is a column on the relation's target table that is non-null for every
    /// related row, so counting its distinct values counts related rows.
    ToManyCollection {
        relation: &'static str,
        counted: DynIden,
    },
    /// Display field of the row reachable through a to-one relation.
    ToOneRelation {
        relation: &'static str,
        display: DynIden,
    },
}

impl ColumnDescriptor {
    pub fn scalar(column: impl IntoIden) -> Self {
        Self::Scalar {
            column: column.into_iden(),
        }
    }

    pub fn to_many(relation: &'static str, counted: impl IntoIden) -> Self {
        Self::ToManyCollection {
            relation,
            counted: counted.into_iden(),
        }
    }

    pub fn to_one(relation: &'static str, display: impl IntoIden) -> Self {
        Self::ToOneRelation {
            relation,
            display: display.into_iden(),
        }
    }

    /// Relation key this column joins through, if any.
    pub fn relation(&self) -> Option<&'static str> {
        match self {
            Self::Scalar { .. } => None,
            Self::ToManyCollection { relation, .. } | Self::ToOneRelation { relation, .. } => {
                Some(relation)
            }
        }
    }
}

/// Validated query metadata for one entity.
pub struct EntityDescriptor<E: EntityTrait, C: SortColumn> {
    name: &'static str,
    table: DynIden,
    primary_key: DynIden,
    columns: Vec<DynIden>,
    relations: HashMap<&'static str, RelationDef>,
    order_columns: HashMap<C, ColumnDescriptor>,
    _entity: PhantomData<E>,
}

impl<E: EntityTrait, C: SortColumn> EntityDescriptor<E, C> {
    pub fn builder(name: &'static str, entity: E, primary_key: E::Column) -> DescriptorBuilder<E, C> {
        DescriptorBuilder {
            name,
            table: entity.into_iden(),
            primary_key: primary_key.into_iden(),
            relations: Vec::new(),
            order_columns: Vec::new(),
            _entity: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn table(&self) -> &DynIden {
        &self.table
    }

    pub fn primary_key(&self) -> &DynIden {
        &self.primary_key
    }

    /// Every column on the entity's own table.
    pub fn columns(&self) -> &[DynIden] {
        &self.columns
    }

    pub fn relation(&self, key: &str) -> Option<&RelationDef> {
        self.relations.get(key)
    }

    /// Whether joining through `key` can multiply base rows.
    pub fn fans_out(&self, key: &str) -> bool {
        self.relations
            .get(key)
            .is_some_and(|rel| matches!(rel.rel_type, RelationType::HasMany))
    }

    pub fn order_column(&self, column: C) -> Option<&ColumnDescriptor> {
        self.order_columns.get(&column)
    }
}

/// Builder collecting relations and sortable columns before validation.
pub struct DescriptorBuilder<E: EntityTrait, C: SortColumn> {
    name: &'static str,
    table: DynIden,
    primary_key: DynIden,
    relations: Vec<(&'static str, RelationDef)>,
    order_columns: Vec<(C, ColumnDescriptor)>,
    _entity: PhantomData<E>,
}

impl<E: EntityTrait, C: SortColumn> DescriptorBuilder<E, C> {
    /// Registers a relation the entity's queries may join through.
    ///
    /// # Arguments
    /// - `key` - Name used by filters and column descriptors to refer to the relation
    /// - `def` - Relation definition starting at this entity
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn relation(mut self, key: &'static str, def: RelationDef) -> Self {
        self.relations.push((key, def));
        self
    }

    pub fn scalar(self, column: C, stored: E::Column) -> Self {
        self.column(column, ColumnDescriptor::scalar(stored))
    }

    pub fn column(mut self, column: C, descriptor: ColumnDescriptor) -> Self {
        self.order_columns.push((column, descriptor));
        self
    }

    /// Validates the collected metadata and produces the descriptor.
    ///
    /// # Returns
    /// - `Ok(EntityDescriptor)` - Every sortable column is mapped exactly once and every
    ///   relation it names exists with the matching cardinality
    /// - `Err(CatalogError)` - The first inconsistency found
    pub fn build(self) -> Result<EntityDescriptor<E, C>, CatalogError> {
        let name = self.name;

        let mut relations = HashMap::new();
        for (key, def) in self.relations {
            if relations.insert(key, def).is_some() {
                return Err(CatalogError::DuplicateRelation {
                    entity: name,
                    relation: key,
                });
            }
        }

        let mut order_columns = HashMap::new();
        for (column, descriptor) in self.order_columns {
            if let Some(key) = descriptor.relation() {
                let def = relations
                    .get(key)
                    .ok_or(CatalogError::UnknownRelation {
                        entity: name,
                        relation: key,
                    })?;

                let kind_matches = match &descriptor {
                    ColumnDescriptor::ToManyCollection { .. } => {
                        matches!(def.rel_type, RelationType::HasMany)
                    }
                    _ => matches!(def.rel_type, RelationType::HasOne),
                };
                if !kind_matches {
                    return Err(CatalogError::RelationKindMismatch {
                        entity: name,
                        column: column.as_str(),
                        relation: key,
                    });
                }
            }

            if order_columns.insert(column, descriptor).is_some() {
                return Err(CatalogError::DuplicateColumn {
                    entity: name,
                    column: column.as_str(),
                });
            }
        }

        if let Some(missing) = C::ALL.iter().find(|c| !order_columns.contains_key(*c)) {
            return Err(CatalogError::UnmappedColumn {
                entity: name,
                column: missing.as_str(),
            });
        }

        Ok(EntityDescriptor {
            name,
            table: self.table,
            primary_key: self.primary_key,
            columns: E::Column::iter().map(IntoIden::into_iden).collect(),
            relations,
            order_columns,
            _entity: PhantomData,
        })
    }
}
