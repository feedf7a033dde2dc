//! Dynamic list queries over catalog entities.
//!
//! List endpoints accept arbitrary combinations of filters and sort tokens. This module turns
//! them into one SQL statement per request without ever letting a client name a column that
//! is not on the entity's allow-list.
//!
//! - `order` - Parses sort tokens into typed directives
//! - `descriptor` - Per-entity metadata: table, relations, sortable column kinds
//! - `catalog` - Allow-lists and descriptors for every entity, validated at startup
//! - `classifier` - Maps a sortable column to its ORDER BY expression and required join
//! - `filter` - AND-combined predicates over base or related columns
//! - `composer` - Builds the SELECT with deduplicated joins, grouping, and stable ordering
//! - `executor` - Runs count and page queries on a connection or transaction
//! - `relation` - Resolves client-supplied relation ids and syncs many-to-many links

pub mod catalog;
pub mod classifier;
pub mod composer;
pub mod descriptor;
pub mod executor;
pub mod filter;
pub mod order;
pub mod relation;

#[cfg(test)]
mod test;
