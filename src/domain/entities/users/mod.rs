pub mod user;

pub use user::UserEntity;
