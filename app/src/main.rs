use leptos::prelude::*;
use nft_market::App;
use tracing_subscriber_wasm::MakeConsoleWriter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(
            // keep trace events from dumping a JS backtrace into the console
            MakeConsoleWriter::default().map_trace_level_to(tracing::Level::DEBUG),
        )
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        // time is not available on wasm32-unknown-unknown
        .without_time()
        .init();

    console_error_panic_hook::set_once();

    mount_to_body(App)
}
