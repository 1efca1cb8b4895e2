pub mod clothes;
pub mod user;
