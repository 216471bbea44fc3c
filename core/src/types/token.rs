use serde::{Deserialize, Deserializer, Serialize};

/// A marketplace asset, as cached by the listing page.
///
/// A token with a price is currently listed for sale. A token without one is
/// available to be listed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Content address of the artwork, resolved through the IPFS gateway.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl Token {
    /// Zero is treated the same as no price at all. Any other amount, even a
    /// negative one, means the token is listed.
    pub fn is_listed(&self) -> bool {
        self.listed_price().is_some()
    }

    pub fn listed_price(&self) -> Option<f64> {
        self.price.filter(|price| *price != 0.0 && !price.is_nan())
    }

    /// Returns this token as listed by `seller` at `price`.
    pub fn list(self, seller: impl Into<String>, price: f64) -> Self {
        Self {
            seller: Some(seller.into()),
            price: Some(price),
            ..self
        }
    }
}

/// Data submitted from the sell modal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SellRequest {
    pub token_id: String,
    pub price: f64,
}

// The listing page has stored ids both as strings and as numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        String(String),
        Number(serde_json::Number),
    }

    match Id::deserialize(deserializer)? {
        Id::String(id) => Ok(id),
        Id::Number(id) => Ok(id.to_string()),
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
