pub mod bcrypt;
pub mod errors;
pub mod generator;

pub use self::bcrypt::PasswordHasher;
pub use self::bcrypt::DEFAULT_COST;
pub use errors::PasswordError;
pub use generator::PasswordGenerator;
pub use generator::PASSWORD_CHARSET;
