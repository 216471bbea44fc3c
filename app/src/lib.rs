use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Router, Routes};
use nft_core::{
    actions::CachedListing,
    constants::CURRENT_USER_KEY,
    state::{CurrentUser, TokenActionsContext, TokenActionsStore},
    storage::read_cached,
    types::User,
    NETWORK,
};
use nft_token::TokenRoutes;
use tracing::{debug, info, warn};

#[component]
pub fn App() -> impl IntoView {
    info!("rendering <App/>");

    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Global Contexts

    let user = read_cached::<User>(CURRENT_USER_KEY).unwrap_or_else(|err| {
        warn!("unable to load current user: {err}");
        None
    });

    provide_context(CurrentUser::new(user));
    provide_context(TokenActionsContext::new(TokenActionsStore::new(
        CachedListing,
    )));

    let current_user = use_context::<CurrentUser>().expect("current user context missing!");
    let token_actions =
        use_context::<TokenActionsContext>().expect("token actions context missing!");

    Effect::new(move |_| {
        info!(
            "Current user set to {:?}",
            current_user.get().map(|user| user.id)
        )
    });

    let last_error = token_actions.last_error();
    Effect::new(move |_| {
        if let Some(err) = last_error.get() {
            debug!("last token action failed: {err}");
        }
    });

    let user_name = move || {
        current_user
            .get()
            .map(|user| user.name.unwrap_or(user.id))
    };

    view! {
        <Title text="NFT Market" />
        <Router>
            <header>
                <div class="flex justify-between items-center">
                    <div class="my-2 font-bold text-3xl line-clamp-1">"NFT Market"</div>
                    <div class="flex gap-2 items-center text-sm">
                        <span class="text-muted">{NETWORK}</span>
                        <Show
                            when=move || user_name().is_some()
                            fallback=|| view! { <span>"Not signed in"</span> }
                        >
                            <p class="hidden sm:block">"Signed in as "<strong>{user_name}</strong></p>
                        </Show>
                    </div>
                </div>
                <hr />
            </header>
            <main class="p-2 overflow-x-auto">
                <Routes transition=true fallback=|| "This page could not be found.">
                    <TokenRoutes />
                </Routes>
            </main>
        </Router>
    }
}
