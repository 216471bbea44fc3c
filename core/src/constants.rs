// Compile-time configuration for network and asset details

pub const NETWORK: &'static str = if cfg!(feature = "mainnet") {
    "mainnet"
} else if cfg!(feature = "testnet") {
    "testnet"
} else {
    "devnet"
};

/// Content-addressed gateway prepended to a token's `image` field.
///
/// Override at build time with the `IPFS_GATEWAY` environment variable.
pub const IPFS_GATEWAY: &'static str = match option_env!("IPFS_GATEWAY") {
    Some(gateway) => gateway,
    None => "https://ipfs.io/ipfs/",
};

pub const PLACEHOLDER_IMAGE: &'static str = "/icons/coin.svg";

pub const CURRENCY: &'static str = "ADA";

// Local storage keys. The listing page writes the selected token under
// VIEW_SINGLE_TOKEN_KEY right before navigating to the token page.
pub const VIEW_SINGLE_TOKEN_KEY: &'static str = "viewSingleToken";
pub const CURRENT_USER_KEY: &'static str = "currentUser";

pub mod labels {
    pub const HEADING: &str = "Token view page";
    pub const NO_AUTHOR: &str = "No author";
    pub const NO_SELLER: &str = "No seller";
    pub const NOT_SELLING: &str = "Token is not selling";
    pub const SELL_TOKEN: &str = "Sell token";
    pub const TOKEN_ACTION: &str = "Token action";
    pub const SELLING: &str = "Please, be patient. Token is selling...";
}
