mod token;
mod user;

pub use token::{SellRequest, Token};
pub use user::User;
