mod dialog;
mod loader;
mod sell_modal;
mod spinner;

pub use dialog::DialogMode;
pub use loader::Loader;
pub use sell_modal::SellModal;
pub use spinner::Spinner;
