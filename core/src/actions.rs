use crate::{
    storage::{read_cached_token, write_cached_token},
    types::{SellRequest, Token, User},
    Error,
};
use async_trait::async_trait;
use tracing::debug;

/// Performs the actual listing of a token for sale.
#[async_trait(?Send)]
pub trait SellBackend: Send + Sync {
    async fn sell(&self, user: &User, request: &SellRequest) -> Result<Token, Error>;
}

/// Lists the token held in the local cache and writes it back, so the next
/// visit to the token page sees it as listed.
#[derive(Clone, Copy, Debug, Default)]
pub struct CachedListing;

impl CachedListing {
    pub fn list(token: Token, user: &User, request: &SellRequest) -> Result<Token, Error> {
        if token.id != request.token_id {
            return Err(Error::generic(format!(
                "Token {} is not the cached token!",
                request.token_id
            )));
        }
        if token.is_listed() {
            return Err(Error::generic(format!(
                "Token {} is already listed!",
                token.id
            )));
        }
        if !(request.price.is_finite() && request.price > 0.0) {
            return Err(Error::InvalidPrice);
        }

        Ok(token.list(user.id.clone(), request.price))
    }
}

#[async_trait(?Send)]
impl SellBackend for CachedListing {
    async fn sell(&self, user: &User, request: &SellRequest) -> Result<Token, Error> {
        let token = read_cached_token()?;
        let token = Self::list(token, user, request)?;
        write_cached_token(&token)?;
        debug!("listed {} for {} by {}", token.id, request.price, user.id);

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn art1() -> Token {
        Token {
            id: "1".to_string(),
            name: "Art1".to_string(),
            description: String::new(),
            image: None,
            author: None,
            seller: None,
            price: None,
        }
    }

    fn request(token_id: &str, price: f64) -> SellRequest {
        SellRequest {
            token_id: token_id.to_string(),
            price,
        }
    }

    #[test]
    fn test_list_sets_price_and_seller() {
        let user = User::new("alice");
        let token = CachedListing::list(art1(), &user, &request("1", 50.0)).unwrap();
        assert_eq!(token.price, Some(50.0));
        assert_eq!(token.seller.as_deref(), Some("alice"));
        assert_eq!(token.name, "Art1");
    }

    #[test]
    fn test_list_rejects_other_token() {
        let user = User::new("alice");
        assert!(CachedListing::list(art1(), &user, &request("2", 50.0)).is_err());
    }

    #[test]
    fn test_list_rejects_listed_token() {
        let user = User::new("alice");
        let listed = art1().list("bob", 10.0);
        assert!(CachedListing::list(listed, &user, &request("1", 50.0)).is_err());
    }

    #[test]
    fn test_list_rejects_bad_price() {
        let user = User::new("alice");
        assert_eq!(
            CachedListing::list(art1(), &user, &request("1", 0.0)),
            Err(Error::InvalidPrice)
        );
        assert_eq!(
            CachedListing::list(art1(), &user, &request("1", f64::NAN)),
            Err(Error::InvalidPrice)
        );
    }
}
