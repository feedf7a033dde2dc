//! Bulk loading of related rows for a page of results.
//!
//! Each loader issues one query for the whole page instead of one query per row.

use std::collections::{BTreeSet, HashMap};

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::query::relation::Resolvable;

/// Loads the rows named by `ids`, keyed by id.
///
/// Ids without a row are silently absent from the map.
pub async fn load_by_ids<E, Db>(
    db: &Db,
    ids: impl IntoIterator<Item = i32>,
) -> Result<HashMap<i32, E::Model>, DbErr>
where
    E: Resolvable,
    Db: ConnectionTrait,
{
    let ids: BTreeSet<i32> = ids.into_iter().collect();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = E::find()
        .filter(E::id_column().is_in(ids))
        .all(db)
        .await?;

    Ok(rows.into_iter().map(|row| (E::id_of(&row), row)).collect())
}

/// Loads the creators referenced by `created_by_user_id` values.
pub async fn load_creators<Db: ConnectionTrait>(
    db: &Db,
    ids: impl IntoIterator<Item = Option<i32>>,
) -> Result<HashMap<i32, entity::user::Model>, DbErr> {
    load_by_ids::<entity::prelude::User, _>(db, ids.into_iter().flatten()).await
}
