pub mod use_user;

pub use use_user::use_user;
