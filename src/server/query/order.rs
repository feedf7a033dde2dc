//! Sort token parsing.
//!
//! Clients send a comma-separated list of sort tokens. Each token names one column from the
//! entity's allow-list together with a direction, either as a sign prefix (`-title`, `+title`,
//! bare `title` is ascending) or as a `__asc` / `__desc` suffix (`title__desc`). Column names are
//! matched case-insensitively.

use std::{fmt::Debug, hash::Hash};

use sea_orm::Order;

use crate::server::error::query::QueryError;

/// Sort direction of a single order directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl From<Direction> for Order {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Asc => Order::Asc,
            Direction::Desc => Order::Desc,
        }
    }
}

/// Closed set of sortable columns for one entity.
///
/// Implemented through the [`sort_columns!`](crate::sort_columns) macro, which keeps the
/// variant list and the wire names in one place.
pub trait SortColumn: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Every member of the allow-list, in declaration order.
    const ALL: &'static [Self];

    /// Wire name of the column as clients write it in sort tokens.
    fn as_str(&self) -> &'static str;

    /// Looks up a column by wire name, ignoring ASCII case.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|column| column.as_str().eq_ignore_ascii_case(name))
    }
}

/// Declares a sort column enum and its [`SortColumn`] implementation.
///
/// ```rust,ignore
/// sort_columns! {
///     /// Sortable game columns.
///     pub enum GameOrderColumn {
///         Title => "title",
///         Platforms => "platforms",
///     }
/// }
/// ```
#[macro_export]
macro_rules! sort_columns {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $crate::server::query::order::SortColumn for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }
    };
}

/// One parsed sort instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderDirective<C> {
    pub column: C,
    pub direction: Direction,
}

impl<C: SortColumn> OrderDirective<C> {
    pub fn asc(column: C) -> Self {
        Self {
            column,
            direction: Direction::Asc,
        }
    }

    pub fn desc(column: C) -> Self {
        Self {
            column,
            direction: Direction::Desc,
        }
    }
}

/// Parses the raw `sort` query parameter into order directives.
///
/// A missing or blank parameter yields no directives. Empty tokens left behind by stray
/// commas are skipped.
///
/// # Arguments
/// - `raw` - Comma-separated sort tokens, if the client sent any
///
/// # Returns
/// - `Ok(Vec<OrderDirective<C>>)` - Directives in the order the client listed them
/// - `Err(QueryError::InvalidOrderColumn)` - A token named a column outside the allow-list
/// - `Err(QueryError::InvalidDirection)` - A token carried a malformed direction
pub fn parse_order<C: SortColumn>(raw: Option<&str>) -> Result<Vec<OrderDirective<C>>, QueryError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    parse_order_tokens(raw.split(','))
}

/// Parses already-split sort tokens into order directives.
///
/// Accepts the same token grammar as [`parse_order`] for callers that receive sort tokens
/// as a repeated parameter instead of a single comma-separated value.
pub fn parse_order_tokens<'t, C, I>(tokens: I) -> Result<Vec<OrderDirective<C>>, QueryError>
where
    C: SortColumn,
    I: IntoIterator<Item = &'t str>,
{
    tokens
        .into_iter()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(parse_token)
        .collect()
}

fn parse_token<C: SortColumn>(token: &str) -> Result<OrderDirective<C>, QueryError> {
    let (sign, rest) = match token.as_bytes()[0] {
        b'-' => (Some(Direction::Desc), &token[1..]),
        b'+' => (Some(Direction::Asc), &token[1..]),
        _ => (None, token),
    };

    let (name, suffix) = match rest.rsplit_once("__") {
        Some((name, suffix)) => {
            let direction = if suffix.eq_ignore_ascii_case("asc") {
                Direction::Asc
            } else if suffix.eq_ignore_ascii_case("desc") {
                Direction::Desc
            } else {
                return Err(QueryError::InvalidDirection(token.to_string()));
            };
            (name, Some(direction))
        }
        None => (rest, None),
    };

    let direction = match (sign, suffix) {
        (Some(_), Some(_)) => return Err(QueryError::InvalidDirection(token.to_string())),
        (Some(direction), None) | (None, Some(direction)) => direction,
        (None, None) => Direction::Asc,
    };

    if name.is_empty() || name.starts_with(['-', '+']) {
        return Err(QueryError::InvalidDirection(token.to_string()));
    }

    let column =
        C::from_name(name).ok_or_else(|| QueryError::InvalidOrderColumn(name.to_string()))?;

    Ok(OrderDirective { column, direction })
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::sort_columns! {
        pub enum Column {
            Title => "title",
            CreatedAt => "created_at",
            Platforms => "platforms",
        }
    }

    fn parse(raw: &str) -> Result<Vec<OrderDirective<Column>>, QueryError> {
        parse_order(Some(raw))
    }

    #[test]
    fn missing_parameter_yields_no_directives() {
        assert_eq!(parse_order::<Column>(None).unwrap(), Vec::new());
        assert_eq!(parse("").unwrap(), Vec::new());
        assert_eq!(parse(" , ,").unwrap(), Vec::new());
    }

    #[test]
    fn sign_prefix_sets_direction() {
        let directives = parse("-platforms,+title,created_at").unwrap();

        assert_eq!(
            directives,
            vec![
                OrderDirective::desc(Column::Platforms),
                OrderDirective::asc(Column::Title),
                OrderDirective::asc(Column::CreatedAt),
            ]
        );
    }

    #[test]
    fn suffix_sets_direction() {
        let directives = parse("title__desc,created_at__ASC").unwrap();

        assert_eq!(
            directives,
            vec![
                OrderDirective::desc(Column::Title),
                OrderDirective::asc(Column::CreatedAt),
            ]
        );
    }

    #[test]
    fn column_names_are_case_insensitive() {
        let directives = parse("-TITLE,Created_At").unwrap();

        assert_eq!(directives[0], OrderDirective::desc(Column::Title));
        assert_eq!(directives[1], OrderDirective::asc(Column::CreatedAt));
    }

    #[test]
    fn rejects_unknown_column() {
        let result = parse("title,-password");

        assert!(matches!(result, Err(QueryError::InvalidOrderColumn(name)) if name == "password"));
    }

    #[test]
    fn rejects_malformed_direction() {
        assert!(matches!(parse("title__sideways"), Err(QueryError::InvalidDirection(_))));
        assert!(matches!(parse("-title__desc"), Err(QueryError::InvalidDirection(_))));
        assert!(matches!(parse("--title"), Err(QueryError::InvalidDirection(_))));
        assert!(matches!(parse("-"), Err(QueryError::InvalidDirection(_))));
    }

    #[test]
    fn preserves_duplicate_directives() {
        let directives = parse("title,-title").unwrap();

        assert_eq!(directives.len(), 2);
        assert_eq!(directives[1], OrderDirective::desc(Column::Title));
    }
}
