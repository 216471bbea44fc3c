use crate::{
    actions::SellBackend,
    error::Error,
    types::{SellRequest, Token, User},
};
use leptos::{prelude::*, task::spawn_local};
use reactive_stores::Store;
use std::{ops::Deref, sync::Arc};
use tracing::{debug, error, info, warn};

#[derive(Copy, Clone, Debug)]
pub struct CurrentUser {
    pub user: RwSignal<Option<User>>,
}

impl CurrentUser {
    pub fn new(user: Option<User>) -> Self {
        Self {
            user: RwSignal::new(user),
        }
    }
}

impl Default for CurrentUser {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Deref for CurrentUser {
    type Target = RwSignal<Option<User>>;

    fn deref(&self) -> &Self::Target {
        &self.user
    }
}

/// The token actions a page can observe and trigger.
///
/// Pages never set `fetching` themselves. It is true from the moment a sell is
/// dispatched until the backend answers, successfully or not. A dispatch made
/// while another sell is in flight is rejected with [`Error::SellInFlight`].
pub trait TokenActionsService: Send + Sync {
    fn fetching(&self) -> Signal<bool>;
    fn last_sold(&self) -> Signal<Option<Token>>;
    fn last_error(&self) -> Signal<Option<Error>>;
    fn dispatch_sell(&self, user: User, request: SellRequest) -> Result<(), Error>;
}

#[derive(Clone)]
pub struct TokenActionsContext(pub Arc<dyn TokenActionsService>);

impl TokenActionsContext {
    pub fn new(service: impl TokenActionsService + 'static) -> Self {
        Self(Arc::new(service))
    }
}

impl Deref for TokenActionsContext {
    type Target = dyn TokenActionsService;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[derive(Store, Clone, Debug, Default)]
pub struct TokenActionsState {
    pub fetching: bool,
    pub last_sold: Option<Token>,
    pub last_error: Option<Error>,
}

#[derive(Clone)]
pub struct TokenActionsStore {
    state: Store<TokenActionsState>,
    backend: Arc<dyn SellBackend>,
}

impl TokenActionsStore {
    pub fn new(backend: impl SellBackend + 'static) -> Self {
        Self {
            state: Store::new(TokenActionsState::default()),
            backend: Arc::new(backend),
        }
    }
}

impl TokenActionsService for TokenActionsStore {
    fn fetching(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.fetching().get())
    }

    fn last_sold(&self) -> Signal<Option<Token>> {
        let state = self.state;
        Signal::derive(move || state.last_sold().get())
    }

    fn last_error(&self) -> Signal<Option<Error>> {
        let state = self.state;
        Signal::derive(move || state.last_error().get())
    }

    fn dispatch_sell(&self, user: User, request: SellRequest) -> Result<(), Error> {
        let state = self.state;

        if state.fetching().get_untracked() {
            warn!("{}", Error::SellInFlight);
            return Err(Error::SellInFlight);
        }

        debug!("dispatching sell of {} by {}", request.token_id, user.id);
        state.fetching().set(true);
        state.last_error().set(None);

        let backend = Arc::clone(&self.backend);
        spawn_local(async move {
            match backend.sell(&user, &request).await {
                Ok(token) => {
                    info!("token {} is now selling", token.id);
                    state.last_sold().set(Some(token));
                }
                Err(err) => {
                    error!("sell failed: {err}");
                    state.last_error().set(Some(err));
                }
            }
            state.fetching().set(false);
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use any_spawner::Executor;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Default)]
    struct StubBackend {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait(?Send)]
    impl SellBackend for StubBackend {
        async fn sell(&self, user: &User, request: &SellRequest) -> Result<Token, Error> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail {
                return Err(Error::generic(format!("backend failure {call}")));
            }
            let token = Token {
                id: request.token_id.clone(),
                name: "Art1".to_string(),
                description: String::new(),
                image: None,
                author: None,
                seller: None,
                price: None,
            };
            Ok(token.list(user.id.clone(), request.price))
        }
    }

    fn request() -> SellRequest {
        SellRequest {
            token_id: "1".to_string(),
            price: 50.0,
        }
    }

    fn store(backend: StubBackend) -> TokenActionsStore {
        // another test on this binary may have set it already
        let _ = Executor::init_futures_executor();
        TokenActionsStore::new(backend)
    }

    #[test]
    fn test_sell_success_lifecycle() {
        let backend = StubBackend::default();
        let store = store(backend.clone());

        assert!(!store.fetching().get_untracked());
        store.dispatch_sell(User::new("alice"), request()).unwrap();
        assert!(store.fetching().get_untracked());
        assert_eq!(store.last_sold().get_untracked(), None);

        Executor::poll_local();

        assert!(!store.fetching().get_untracked());
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.last_error().get_untracked(), None);
        let sold = store.last_sold().get_untracked().unwrap();
        assert_eq!(sold.id, "1");
        assert_eq!(sold.price, Some(50.0));
        assert_eq!(sold.seller.as_deref(), Some("alice"));
    }

    #[test]
    fn test_sell_failure_and_second_dispatch() {
        let backend = StubBackend {
            fail: true,
            ..Default::default()
        };
        let store = store(backend.clone());

        store.dispatch_sell(User::new("alice"), request()).unwrap();
        assert_eq!(
            store.dispatch_sell(User::new("alice"), request()),
            Err(Error::SellInFlight)
        );
        assert!(store.fetching().get_untracked());

        Executor::poll_local();

        assert!(!store.fetching().get_untracked());
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.last_sold().get_untracked(), None);
        assert_eq!(
            store.last_error().get_untracked(),
            Some(Error::Generic("backend failure 1".to_string()))
        );
    }

    #[test]
    fn test_new_dispatch_clears_last_error() {
        let backend = StubBackend {
            fail: true,
            ..Default::default()
        };
        let store = store(backend.clone());

        store.dispatch_sell(User::new("alice"), request()).unwrap();
        Executor::poll_local();
        assert!(store.last_error().get_untracked().is_some());

        store.dispatch_sell(User::new("alice"), request()).unwrap();
        assert_eq!(store.last_error().get_untracked(), None);
        assert!(store.fetching().get_untracked());

        Executor::poll_local();
        assert_eq!(backend.calls.load(Ordering::SeqCst), 2);
        assert!(!store.fetching().get_untracked());
    }
}
