use crate::dialog::{sync_dialog, DialogMode};
use leptos::{ev, html::Dialog, prelude::*};
use lucide_leptos::X;
use nft_core::{
    types::{SellRequest, Token},
    utils::parse_price,
    Error,
};
use tracing::{debug, info};

// The sell modal always blocks the page behind it.
pub(crate) fn modal_mode(show: bool) -> DialogMode {
    DialogMode::new(show, true)
}

pub fn sell_request(token: &Token, amount: &str) -> Result<SellRequest, Error> {
    let price = parse_price(amount).ok_or(Error::InvalidPrice)?;

    Ok(SellRequest {
        token_id: token.id.clone(),
        price,
    })
}

/// Asks for a price and hands a [`SellRequest`] to `on_submit`.
///
/// The dialog stays open and shows the error if the price is invalid or
/// `on_submit` refuses the request. It closes itself on success.
#[component]
pub fn SellModal(
    show: RwSignal<bool>,
    token: Token,
    #[prop(into)] on_submit: Callback<SellRequest, Result<(), Error>>,
) -> impl IntoView {
    info!("rendering <SellModal/>");

    let dialog_ref = NodeRef::<Dialog>::new();
    let (amount, set_amount) = signal(String::default());
    let error = RwSignal::new(None::<Error>);

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            sync_dialog(&dialog, modal_mode(show.get()));
        }
    });

    let reset = move || {
        show.set(false);
        set_amount.set(String::default());
        error.set(None);
    };

    let token_name = token.name.clone();

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let amount = amount.get_untracked();
        match sell_request(&token, &amount).and_then(|request| on_submit.run(request)) {
            Ok(()) => reset(),
            Err(err) => {
                debug!("sell rejected: {err}");
                error.set(Some(err));
            }
        }
    };

    view! {
        // the browser closes a modal dialog on Escape by itself
        <dialog
            node_ref=dialog_ref
            on:close=move |_| reset()
            class="w-80 p-0 shadow-md bg-background text-foreground rounded-md border border-solid border-border"
        >
            <div class="flex justify-between items-center p-2 pl-3 border-0 border-b border-solid border-border">
                <p class="m-0">"Sell " {token_name}</p>
                <button
                    type="button"
                    title="Close"
                    on:click=move |_| show.set(false)
                    class="appearance-none border-0 flex shrink-0 items-center justify-center w-6 h-6 p-1 box-border rounded-md bg-transparent hover:bg-muted"
                >
                    <X size=16 />
                </button>
            </div>
            <form on:submit=submit class="flex flex-col gap-2 p-3">
                <label for="sell-price" class="text-sm text-muted-foreground">
                    "Price (ADA)"
                </label>
                <input
                    id="sell-price"
                    type="number"
                    min="0"
                    step="any"
                    autofocus
                    prop:value=amount
                    on:input=move |ev| set_amount.set(event_target_value(&ev))
                    class="p-1"
                />
                {move || {
                    error
                        .get()
                        .map(|err| view! { <p class="m-0 text-sm text-red-500">{err.to_string()}</p> })
                }}
                <button type="submit" class="py-1.5 px-3 font-semibold">
                    "Sell"
                </button>
            </form>
        </dialog>
    }
}
