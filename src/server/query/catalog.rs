//! Sortable column allow-lists and the descriptors for every catalog entity.

use entity::{company, game, game_genre, game_platform, genre, platform, prelude::*, sale, user};
use sea_orm::RelationTrait;

use crate::{
    server::{
        error::catalog::CatalogError,
        query::descriptor::{ColumnDescriptor, EntityDescriptor},
    },
    sort_columns,
};

sort_columns! {
    /// Columns users can be sorted by.
    pub enum UserOrderColumn {
        Id => "id",
        Username => "username",
        Email => "email",
        IsSuperuser => "is_superuser",
        IsPrimary => "is_primary",
        CreatedAt => "created_at",
        CreatedCompanies => "created_companies",
        CreatedPlatforms => "created_platforms",
        CreatedGenres => "created_genres",
        CreatedGames => "created_games",
        CreatedSales => "created_sales",
    }
}

sort_columns! {
    /// Columns companies can be sorted by.
    pub enum CompanyOrderColumn {
        Id => "id",
        Title => "title",
        FoundedAt => "founded_at",
        CreatedAt => "created_at",
        Games => "games",
        CreatedByUser => "created_by_user",
    }
}

sort_columns! {
    /// Columns platforms can be sorted by.
    pub enum PlatformOrderColumn {
        Id => "id",
        Title => "title",
        CreatedAt => "created_at",
        Games => "games",
        Sales => "sales",
        CreatedByUser => "created_by_user",
    }
}

sort_columns! {
    /// Columns genres can be sorted by.
    pub enum GenreOrderColumn {
        Id => "id",
        Title => "title",
        CreatedAt => "created_at",
        Games => "games",
        CreatedByUser => "created_by_user",
    }
}

sort_columns! {
    /// Columns games can be sorted by.
    pub enum GameOrderColumn {
        Id => "id",
        Title => "title",
        ReleasedAt => "released_at",
        CreatedAt => "created_at",
        Sales => "sales",
        Platforms => "platforms",
        Genres => "genres",
        CreatedByCompany => "created_by_company",
        CreatedByUser => "created_by_user",
    }
}

sort_columns! {
    /// Columns sales can be sorted by.
    pub enum SaleOrderColumn {
        Id => "id",
        Amount => "amount",
        CreatedAt => "created_at",
        Game => "game",
        Platform => "platform",
        CreatedByUser => "created_by_user",
    }
}

/// Descriptors for every catalog entity, built and validated once at startup.
pub struct Catalog {
    users: EntityDescriptor<User, UserOrderColumn>,
    companies: EntityDescriptor<Company, CompanyOrderColumn>,
    platforms: EntityDescriptor<Platform, PlatformOrderColumn>,
    genres: EntityDescriptor<Genre, GenreOrderColumn>,
    games: EntityDescriptor<Game, GameOrderColumn>,
    sales: EntityDescriptor<Sale, SaleOrderColumn>,
}

impl Catalog {
    /// Builds the descriptor for every entity.
    ///
    /// # Returns
    /// - `Ok(Catalog)` - All descriptors passed validation
    /// - `Err(CatalogError)` - A descriptor disagrees with its allow-list or the schema
    pub fn build() -> Result<Self, CatalogError> {
        Ok(Self {
            users: users()?,
            companies: companies()?,
            platforms: platforms()?,
            genres: genres()?,
            games: games()?,
            sales: sales()?,
        })
    }

    pub fn users(&self) -> &EntityDescriptor<User, UserOrderColumn> {
        &self.users
    }

    pub fn companies(&self) -> &EntityDescriptor<Company, CompanyOrderColumn> {
        &self.companies
    }

    pub fn platforms(&self) -> &EntityDescriptor<Platform, PlatformOrderColumn> {
        &self.platforms
    }

    pub fn genres(&self) -> &EntityDescriptor<Genre, GenreOrderColumn> {
        &self.genres
    }

    pub fn games(&self) -> &EntityDescriptor<Game, GameOrderColumn> {
        &self.games
    }

    pub fn sales(&self) -> &EntityDescriptor<Sale, SaleOrderColumn> {
        &self.sales
    }
}

fn created_by_user() -> ColumnDescriptor {
    ColumnDescriptor::to_one("created_by_user", user::Column::Username)
}

fn users() -> Result<EntityDescriptor<User, UserOrderColumn>, CatalogError> {
    use UserOrderColumn as C;

    EntityDescriptor::builder("user", User, user::Column::Id)
        .relation("companies", user::Relation::Company.def())
        .relation("platforms", user::Relation::Platform.def())
        .relation("genres", user::Relation::Genre.def())
        .relation("games", user::Relation::Game.def())
        .relation("sales", user::Relation::Sale.def())
        .scalar(C::Id, user::Column::Id)
        .scalar(C::Username, user::Column::Username)
        .scalar(C::Email, user::Column::Email)
        .scalar(C::IsSuperuser, user::Column::IsSuperuser)
        .scalar(C::IsPrimary, user::Column::IsPrimary)
        .scalar(C::CreatedAt, user::Column::CreatedAt)
        .column(
            C::CreatedCompanies,
            ColumnDescriptor::to_many("companies", company::Column::Id),
        )
        .column(
            C::CreatedPlatforms,
            ColumnDescriptor::to_many("platforms", platform::Column::Id),
        )
        .column(
            C::CreatedGenres,
            ColumnDescriptor::to_many("genres", genre::Column::Id),
        )
        .column(
            C::CreatedGames,
            ColumnDescriptor::to_many("games", game::Column::Id),
        )
        .column(
            C::CreatedSales,
            ColumnDescriptor::to_many("sales", sale::Column::Id),
        )
        .build()
}

fn companies() -> Result<EntityDescriptor<Company, CompanyOrderColumn>, CatalogError> {
    use CompanyOrderColumn as C;

    EntityDescriptor::builder("company", Company, company::Column::Id)
        .relation("games", company::Relation::Game.def())
        .relation("created_by_user", company::Relation::CreatedByUser.def())
        .scalar(C::Id, company::Column::Id)
        .scalar(C::Title, company::Column::Title)
        .scalar(C::FoundedAt, company::Column::FoundedAt)
        .scalar(C::CreatedAt, company::Column::CreatedAt)
        .column(C::Games, ColumnDescriptor::to_many("games", game::Column::Id))
        .column(C::CreatedByUser, created_by_user())
        .build()
}

fn platforms() -> Result<EntityDescriptor<Platform, PlatformOrderColumn>, CatalogError> {
    use PlatformOrderColumn as C;

    EntityDescriptor::builder("platform", Platform, platform::Column::Id)
        .relation("games", platform::Relation::GamePlatform.def())
        .relation("sales", platform::Relation::Sale.def())
        .relation("created_by_user", platform::Relation::CreatedByUser.def())
        .scalar(C::Id, platform::Column::Id)
        .scalar(C::Title, platform::Column::Title)
        .scalar(C::CreatedAt, platform::Column::CreatedAt)
        .column(
            C::Games,
            ColumnDescriptor::to_many("games", game_platform::Column::GameId),
        )
        .column(C::Sales, ColumnDescriptor::to_many("sales", sale::Column::Id))
        .column(C::CreatedByUser, created_by_user())
        .build()
}

fn genres() -> Result<EntityDescriptor<Genre, GenreOrderColumn>, CatalogError> {
    use GenreOrderColumn as C;

    EntityDescriptor::builder("genre", Genre, genre::Column::Id)
        .relation("games", genre::Relation::GameGenre.def())
        .relation("created_by_user", genre::Relation::CreatedByUser.def())
        .scalar(C::Id, genre::Column::Id)
        .scalar(C::Title, genre::Column::Title)
        .scalar(C::CreatedAt, genre::Column::CreatedAt)
        .column(
            C::Games,
            ColumnDescriptor::to_many("games", game_genre::Column::GameId),
        )
        .column(C::CreatedByUser, created_by_user())
        .build()
}

fn games() -> Result<EntityDescriptor<Game, GameOrderColumn>, CatalogError> {
    use GameOrderColumn as C;

    EntityDescriptor::builder("game", Game, game::Column::Id)
        .relation("sales", game::Relation::Sale.def())
        .relation("platforms", game::Relation::GamePlatform.def())
        .relation("genres", game::Relation::GameGenre.def())
        .relation("created_by_company", game::Relation::CreatedByCompany.def())
        .relation("created_by_user", game::Relation::CreatedByUser.def())
        .scalar(C::Id, game::Column::Id)
        .scalar(C::Title, game::Column::Title)
        .scalar(C::ReleasedAt, game::Column::ReleasedAt)
        .scalar(C::CreatedAt, game::Column::CreatedAt)
        .column(C::Sales, ColumnDescriptor::to_many("sales", sale::Column::Id))
        .column(
            C::Platforms,
            ColumnDescriptor::to_many("platforms", game_platform::Column::PlatformId),
        )
        .column(
            C::Genres,
            ColumnDescriptor::to_many("genres", game_genre::Column::GenreId),
        )
        .column(
            C::CreatedByCompany,
            ColumnDescriptor::to_one("created_by_company", company::Column::Title),
        )
        .column(C::CreatedByUser, created_by_user())
        .build()
}

fn sales() -> Result<EntityDescriptor<Sale, SaleOrderColumn>, CatalogError> {
    use SaleOrderColumn as C;

    EntityDescriptor::builder("sale", Sale, sale::Column::Id)
        .relation("game", sale::Relation::Game.def())
        .relation("platform", sale::Relation::Platform.def())
        .relation("created_by_user", sale::Relation::CreatedByUser.def())
        .scalar(C::Id, sale::Column::Id)
        .scalar(C::Amount, sale::Column::Amount)
        .scalar(C::CreatedAt, sale::Column::CreatedAt)
        .column(C::Game, ColumnDescriptor::to_one("game", game::Column::Title))
        .column(
            C::Platform,
            ColumnDescriptor::to_one("platform", platform::Column::Title),
        )
        .column(C::CreatedByUser, created_by_user())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::query::order::SortColumn;

    #[test]
    fn builds_every_descriptor() {
        let catalog = Catalog::build().unwrap();

        assert_eq!(catalog.users().name(), "user");
        assert_eq!(catalog.sales().name(), "sale");
    }

    #[test]
    fn every_allowed_column_is_described() {
        let catalog = Catalog::build().unwrap();

        for column in GameOrderColumn::ALL {
            assert!(catalog.games().order_column(*column).is_some());
        }
        for column in UserOrderColumn::ALL {
            assert!(catalog.users().order_column(*column).is_some());
        }
    }

    #[test]
    fn to_many_relations_fan_out() {
        let catalog = Catalog::build().unwrap();

        assert!(catalog.games().fans_out("platforms"));
        assert!(catalog.platforms().fans_out("games"));
        assert!(!catalog.games().fans_out("created_by_company"));
        assert!(!catalog.sales().fans_out("game"));
    }
}
