use nft_core::{
    constants::labels,
    types::Token,
    utils::{display_price, image_src},
};

/// What the button under a token card does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenAction {
    /// Not listed yet, so it can be put up for sale.
    Sell,
    /// Already listed. The button is a disabled placeholder.
    Listed,
}

impl TokenAction {
    pub fn label(&self) -> &'static str {
        match self {
            TokenAction::Sell => labels::SELL_TOKEN,
            TokenAction::Listed => labels::TOKEN_ACTION,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, TokenAction::Sell)
    }
}

/// Display strings for a token card, with every fallback already applied.
#[derive(Clone, Debug, PartialEq)]
pub struct TokenDetails {
    pub image_src: String,
    pub name: String,
    pub description: String,
    pub author: String,
    pub seller: String,
    pub price: String,
    pub action: TokenAction,
}

fn or_default(value: Option<&str>, default: &str) -> String {
    value
        .filter(|value| !value.is_empty())
        .unwrap_or(default)
        .to_string()
}

impl From<&Token> for TokenDetails {
    fn from(token: &Token) -> Self {
        let (price, action) = match token.listed_price() {
            Some(price) => (display_price(price), TokenAction::Listed),
            None => (labels::NOT_SELLING.to_string(), TokenAction::Sell),
        };

        Self {
            image_src: image_src(token.image.as_deref()),
            name: token.name.clone(),
            description: token.description.clone(),
            author: or_default(token.author.as_deref(), labels::NO_AUTHOR),
            seller: or_default(token.seller.as_deref(), labels::NO_SELLER),
            price,
            action,
        }
    }
}
