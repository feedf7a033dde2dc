//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    server::query::filter::FilterPredicate,
};

/// Account allowed to sign in and manage the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// Whether the user may create, modify and delete catalog records and other users.
    pub is_superuser: bool,
    /// Whether this is the account provisioned at startup, which can never be deleted.
    pub is_primary: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The stored password hash is dropped here and never leaves the data layer.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            is_superuser: entity.is_superuser,
            is_primary: entity.is_primary,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            is_superuser: self.is_superuser,
            is_primary: self.is_primary,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a user.
///
/// `password` is plaintext; the service hashes it before it reaches the repository.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password: String,
    pub is_superuser: bool,
    pub is_primary: bool,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            username: dto.username,
            email: dto.email,
            password: dto.password,
            is_superuser: dto.is_superuser,
            is_primary: false,
        }
    }
}

/// Partial update of a user. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_superuser: Option<bool>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            username: dto.username,
            email: dto.email,
            password: dto.password,
            is_superuser: dto.is_superuser,
        }
    }
}

/// Filters accepted by the user list endpoint.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub username: Option<String>,
    pub email: Option<String>,
    pub is_superuser: Option<bool>,
    pub is_primary: Option<bool>,
}

impl UserFilter {
    pub fn into_predicates(self) -> Vec<FilterPredicate> {
        use entity::user::Column;

        let mut predicates = Vec::new();
        if let Some(username) = self.username {
            predicates.push(FilterPredicate::contains(Column::Username, username));
        }
        if let Some(email) = self.email {
            predicates.push(FilterPredicate::contains(Column::Email, email));
        }
        if let Some(is_superuser) = self.is_superuser {
            predicates.push(FilterPredicate::equals(Column::IsSuperuser, is_superuser));
        }
        if let Some(is_primary) = self.is_primary {
            predicates.push(FilterPredicate::equals(Column::IsPrimary, is_primary));
        }
        predicates
    }
}
