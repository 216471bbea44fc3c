mod routes;
mod token_details;
mod token_page;

pub use routes::TokenRoutes;
pub use token_details::{TokenAction, TokenDetails};
pub use token_page::{submit_sell, TokenPage};
