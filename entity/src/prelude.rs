pub use super::company::Entity as Company;
pub use super::game::Entity as Game;
pub use super::game_genre::Entity as GameGenre;
pub use super::game_platform::Entity as GamePlatform;
pub use super::genre::Entity as Genre;
pub use super::platform::Entity as Platform;
pub use super::sale::Entity as Sale;
pub use super::user::Entity as User;
