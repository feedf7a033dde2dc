//! Resolution of client-supplied relation ids and many-to-many synchronization.

use std::collections::BTreeSet;

use entity::{company, game, genre, platform, prelude::*, sale, user};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, QuerySelect,
};

use crate::server::error::{query::QueryError, AppError};

/// Entity whose rows can be looked up by integer id.
pub trait Resolvable: EntityTrait {
    /// Entity name reported when ids are missing.
    const NAME: &'static str;

    fn id_column() -> Self::Column;

    fn id_of(model: &Self::Model) -> i32;
}

macro_rules! resolvable {
    ($($entity:ty => $module:ident, $name:literal;)+) => {
        $(
            impl Resolvable for $entity {
                const NAME: &'static str = $name;

                fn id_column() -> Self::Column {
                    $module::Column::Id
                }

                fn id_of(model: &Self::Model) -> i32 {
                    model.id
                }
            }
        )+
    };
}

resolvable! {
    User => user, "user";
    Company => company, "company";
    Platform => platform, "platform";
    Genre => genre, "genre";
    Game => game, "game";
    Sale => sale, "sale";
}

/// Loads every row named in `ids`, failing if any of them does not exist.
///
/// Duplicate ids are collapsed. The error lists every missing id in ascending order, not just
/// the first one found.
///
/// # Arguments
/// - `db` - Connection or transaction to read through
/// - `ids` - Ids supplied by the client
///
/// # Returns
/// - `Ok(Vec<E::Model>)` - One model per distinct id
/// - `Err(AppError::QueryErr(RelationNotFound))` - At least one id has no row
/// - `Err(AppError::DbErr)` - Database error during lookup
pub async fn resolve_ids<E, Db>(db: &Db, ids: &[i32]) -> Result<Vec<E::Model>, AppError>
where
    E: Resolvable,
    Db: ConnectionTrait,
{
    let wanted: BTreeSet<i32> = ids.iter().copied().collect();
    if wanted.is_empty() {
        return Ok(Vec::new());
    }

    let found = E::find()
        .filter(E::id_column().is_in(wanted.iter().copied()))
        .all(db)
        .await?;

    let found_ids: BTreeSet<i32> = found.iter().map(E::id_of).collect();
    let missing: Vec<i32> = wanted.difference(&found_ids).copied().collect();
    if !missing.is_empty() {
        return Err(QueryError::RelationNotFound {
            entity: E::NAME,
            ids: missing,
        }
        .into());
    }

    Ok(found)
}

/// Link rows added and removed when replacing a many-to-many set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationDiff {
    pub additions: Vec<i32>,
    pub removals: Vec<i32>,
}

impl RelationDiff {
    /// Computes the changes turning `current` into `desired`.
    pub fn between(current: &BTreeSet<i32>, desired: &BTreeSet<i32>) -> Self {
        Self {
            additions: desired.difference(current).copied().collect(),
            removals: current.difference(desired).copied().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.removals.is_empty()
    }
}

/// Junction table linking an owner entity to a target entity.
pub struct Junction<J: EntityTrait> {
    owner: J::Column,
    target: J::Column,
    link: fn(i32, i32) -> J::ActiveModel,
}

impl<J> Junction<J>
where
    J: EntityTrait,
    J::Model: IntoActiveModel<J::ActiveModel>,
    J::ActiveModel: ActiveModelTrait<Entity = J> + Send,
{
    /// # Arguments
    /// - `owner` - Junction column holding the owner's id
    /// - `target` - Junction column holding the target's id
    /// - `link` - Builds a junction row from `(owner_id, target_id)`
    pub fn new(owner: J::Column, target: J::Column, link: fn(i32, i32) -> J::ActiveModel) -> Self {
        Self {
            owner,
            target,
            link,
        }
    }

    /// Ids of the targets currently linked to `owner_id`.
    pub async fn current<Db: ConnectionTrait>(
        &self,
        db: &Db,
        owner_id: i32,
    ) -> Result<BTreeSet<i32>, DbErr> {
        let ids: Vec<i32> = J::find()
            .select_only()
            .column(self.target)
            .filter(self.owner.eq(owner_id))
            .into_tuple()
            .all(db)
            .await?;

        Ok(ids.into_iter().collect())
    }

    /// Links `owner_id` to every id in `targets`.
    pub async fn attach<Db: ConnectionTrait>(
        &self,
        db: &Db,
        owner_id: i32,
        targets: &[i32],
    ) -> Result<(), DbErr> {
        for &target_id in targets {
            J::insert((self.link)(owner_id, target_id))
                .exec_without_returning(db)
                .await?;
        }

        Ok(())
    }

    /// Removes the links from `owner_id` to every id in `targets`.
    pub async fn detach<Db: ConnectionTrait>(
        &self,
        db: &Db,
        owner_id: i32,
        targets: &[i32],
    ) -> Result<(), DbErr> {
        if targets.is_empty() {
            return Ok(());
        }

        J::delete_many()
            .filter(self.owner.eq(owner_id))
            .filter(self.target.is_in(targets.iter().copied()))
            .exec(db)
            .await?;

        Ok(())
    }

    /// Replaces the set of targets linked to `owner_id` with `desired`.
    ///
    /// Only the difference is written: links in both sets are left untouched.
    ///
    /// # Returns
    /// - `Ok(RelationDiff)` - Links that were added and removed
    /// - `Err(DbErr)` - Database error while reading or writing links
    pub async fn replace<Db: ConnectionTrait>(
        &self,
        db: &Db,
        owner_id: i32,
        desired: &BTreeSet<i32>,
    ) -> Result<RelationDiff, DbErr> {
        let current = self.current(db, owner_id).await?;
        let diff = RelationDiff::between(&current, desired);

        self.detach(db, owner_id, &diff.removals).await?;
        self.attach(db, owner_id, &diff.additions).await?;

        Ok(diff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diff_adds_and_removes_only_changes() {
        let current = BTreeSet::from([1, 2]);
        let desired = BTreeSet::from([2, 3]);

        let diff = RelationDiff::between(&current, &desired);

        assert_eq!(diff.additions, vec![3]);
        assert_eq!(diff.removals, vec![1]);
    }

    #[test]
    fn diff_of_equal_sets_is_empty() {
        let set = BTreeSet::from([4, 5]);

        assert!(RelationDiff::between(&set, &set).is_empty());
    }
}
