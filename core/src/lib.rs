pub mod actions;
pub mod constants;
mod error;
pub mod state;
pub mod storage;
pub mod types;
pub mod utils;

pub use constants::{IPFS_GATEWAY, NETWORK, PLACEHOLDER_IMAGE};
pub use error::Error;
pub use state::{CurrentUser, TokenActionsContext, TokenActionsService, TokenActionsStore};
