pub mod clothes;
pub mod user;

pub use clothes::PostgresClothesRepository;
pub use user::PostgresUserRepository;
