use crate::token_page::TokenPage;
use leptos::prelude::{component, view};
use leptos_router::{
    components::{Outlet, ParentRoute, Route},
    MatchNestedRoutes,
};
use leptos_router_macro::path;

#[component]
pub fn TokenRoutes() -> impl MatchNestedRoutes + Clone {
    view! {
        <ParentRoute path=path!("/nft-market") view=Outlet>
            <Route path=path!("") view=TokenPage />
            <Route path=path!("token") view=TokenPage />
        </ParentRoute>
    }
    .into_inner()
}
