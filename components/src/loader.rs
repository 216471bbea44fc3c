use crate::{
    dialog::{sync_dialog, DialogMode},
    Spinner,
};
use leptos::{html::Dialog, prelude::*};
use tracing::debug;

pub(crate) fn loader_mode(when: bool, disable_background: bool) -> DialogMode {
    DialogMode::new(when, disable_background)
}

/// Progress overlay with a fixed message, open only while `when` is true.
///
/// With `disable_background`, the dialog is opened modally so nothing behind it
/// can be clicked, and Escape does not dismiss it.
#[component]
pub fn Loader(
    #[prop(into)] when: Signal<bool>,
    #[prop(into)] text: String,
    #[prop(optional)] disable_background: bool,
) -> impl IntoView {
    let dialog_ref = NodeRef::<Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            let mode = loader_mode(when.get(), disable_background);
            debug!("loader {mode:?}");
            sync_dialog(&dialog, mode);
        }
    });

    view! {
        <dialog
            node_ref=dialog_ref
            on:cancel=move |ev: leptos::ev::Event| {
                if disable_background {
                    ev.prevent_default();
                }
            }
            class="loader"
        >
            // prevent focus ring from showing around the main div
            <div tabindex="0"></div>
            // NOTE: a closed dialog is 'display: none', so the spinner only
            // animates while the loader is actually open.
            <div class="align-middle inline-flex items-center justify-center gap-3">
                <Spinner size="h-8 w-8" />
                <div class="font-bold">{text}</div>
            </div>
        </dialog>
    }
}
