use crate::token_details::{TokenAction, TokenDetails};
use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use nft_components::{Loader, SellModal};
use nft_core::{
    constants::labels,
    state::{CurrentUser, TokenActionsContext},
    storage::read_cached_token,
    types::{SellRequest, Token, User},
    Error,
};
use tracing::{debug, info, warn};

/// Forwards a sell request, attributed to the signed-in user, to the store.
pub fn submit_sell(
    token_actions: &TokenActionsContext,
    user: Option<User>,
    request: SellRequest,
) -> Result<(), Error> {
    let user = user.ok_or(Error::NoCurrentUser)?;
    token_actions.dispatch_sell(user, request)
}

// Listed tokens have no sell interaction.
fn request_sell(action: TokenAction, show_modal: RwSignal<bool>) {
    if action.is_enabled() {
        show_modal.set(true);
    }
}

#[component]
pub fn TokenPage() -> impl IntoView {
    info!("rendering <TokenPage/>");

    on_cleanup(move || {
        info!("cleaning up <TokenPage/>");
    });

    let current_user = use_context::<CurrentUser>().expect("current user context missing!");
    let token_actions =
        use_context::<TokenActionsContext>().expect("token actions context missing!");

    // Hydrated once per mount. The listing page writes this key before navigating here.
    let token: RwSignal<Result<Token, Error>> = RwSignal::new(
        read_cached_token().inspect_err(|err| warn!("unable to load cached token: {err}")),
    );
    let show_modal = RwSignal::new(false);
    let fetching = token_actions.fetching();

    // Refresh the card once the store reports this token as listed.
    let last_sold = token_actions.last_sold();
    Effect::new(move |_| {
        if let Some(sold) = last_sold.get() {
            let is_current = token.with_untracked(|token| {
                token
                    .as_ref()
                    .is_ok_and(|token| token.id == sold.id && *token != sold)
            });
            if is_current {
                debug!("token {} was listed, refreshing", sold.id);
                token.set(Ok(sold));
            }
        }
    });

    let on_submit = Callback::new(move |request: SellRequest| {
        submit_sell(&token_actions, current_user.get_untracked(), request)
            .inspect_err(|err| warn!("{err}"))
    });

    view! {
        <Title text="Token" />
        <div class="token-page">
            <h3 class="heading">{labels::HEADING}</h3>
            {move || match token.get() {
                Ok(token) => {
                    Either::Left(view! { <TokenCard token=token show_modal=show_modal on_submit=on_submit /> })
                }
                Err(error) => Either::Right(view! { <NoToken error=error /> }),
            }}
            <Loader when=fetching text=labels::SELLING disable_background=true />
        </div>
    }
}

#[component]
fn TokenCard(
    token: Token,
    show_modal: RwSignal<bool>,
    on_submit: Callback<SellRequest, Result<(), Error>>,
) -> impl IntoView {
    let TokenDetails {
        image_src,
        name,
        description,
        author,
        seller,
        price,
        action,
    } = TokenDetails::from(&token);

    view! {
        <div class="card-container">
            <img class="card-img" src=image_src alt=name.clone() />
            <div class="card">
                <div class="card-body">
                    <h5 class="card-title">{name}</h5>
                    <p class="card-text">{description}</p>
                </div>
                <div class="card-body">
                    <ul class="list-group list-group-flush">
                        <li class="list-group-item">
                            <h6 class="card-subtitle mb-2 text-muted">"Author:"</h6>
                            {author}
                        </li>
                        <li class="list-group-item">
                            <h6 class="card-subtitle mb-2 text-muted">"Seller id:"</h6>
                            {seller}
                        </li>
                        <li class="list-group-item">
                            <h6 class="card-subtitle mb-2 text-muted">"Price:"</h6>
                            {price}
                        </li>
                    </ul>
                </div>
                <div class="card-body">
                    <button
                        class="btn btn-secondary"
                        disabled=!action.is_enabled()
                        on:click=move |_| request_sell(action, show_modal)
                    >
                        {action.label()}
                    </button>
                </div>
            </div>
        </div>
        <SellModal show=show_modal token=token on_submit=on_submit />
    }
}

#[component]
fn NoToken(error: Error) -> impl IntoView {
    view! {
        <div class="empty-state">
            <p class="font-bold">{error.to_string()}</p>
            <p class="text-muted">"Pick a token from the marketplace to see its details."</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nft_core::state::TokenActionsService;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordedSells {
        sells: Arc<Mutex<Vec<(User, SellRequest)>>>,
        busy: bool,
    }

    impl TokenActionsService for RecordedSells {
        fn fetching(&self) -> Signal<bool> {
            Signal::derive(|| false)
        }
        fn last_sold(&self) -> Signal<Option<Token>> {
            Signal::derive(|| None)
        }
        fn last_error(&self) -> Signal<Option<Error>> {
            Signal::derive(|| None)
        }
        fn dispatch_sell(&self, user: User, request: SellRequest) -> Result<(), Error> {
            if self.busy {
                return Err(Error::SellInFlight);
            }
            self.sells.lock().unwrap().push((user, request));
            Ok(())
        }
    }

    fn request() -> SellRequest {
        SellRequest {
            token_id: "1".to_string(),
            price: 50.0,
        }
    }

    #[test]
    fn test_submit_sell_forwards_user_and_data() {
        let sells = RecordedSells::default();
        let token_actions = TokenActionsContext::new(sells.clone());

        submit_sell(&token_actions, Some(User::new("alice")), request()).unwrap();

        let recorded = sells.sells.lock().unwrap();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].0.id, "alice");
        assert_eq!(recorded[0].1, request());
    }

    #[test]
    fn test_submit_sell_requires_user() {
        let sells = RecordedSells::default();
        let token_actions = TokenActionsContext::new(sells.clone());

        assert_eq!(
            submit_sell(&token_actions, None, request()),
            Err(Error::NoCurrentUser)
        );
        assert!(sells.sells.lock().unwrap().is_empty());
    }

    #[test]
    fn test_submit_sell_reports_sell_in_flight() {
        let sells = RecordedSells {
            busy: true,
            ..Default::default()
        };
        let token_actions = TokenActionsContext::new(sells.clone());

        assert_eq!(
            submit_sell(&token_actions, Some(User::new("alice")), request()),
            Err(Error::SellInFlight)
        );
        assert!(sells.sells.lock().unwrap().is_empty());
    }

    #[test]
    fn test_request_sell_opens_modal() {
        let show_modal = RwSignal::new(false);
        request_sell(TokenAction::Sell, show_modal);
        assert!(show_modal.get_untracked());
    }

    #[test]
    fn test_request_sell_ignored_when_listed() {
        let show_modal = RwSignal::new(false);
        request_sell(TokenAction::Listed, show_modal);
        assert!(!show_modal.get_untracked());
    }
}
