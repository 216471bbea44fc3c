use tracing::warn;
use web_sys::HtmlDialogElement;

/// How a `<dialog>` should be displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogMode {
    Closed,
    /// Open, page underneath still interactive.
    Open,
    /// Open with the backdrop blocking the page.
    Modal,
}

impl DialogMode {
    pub fn new(visible: bool, blocking: bool) -> Self {
        match (visible, blocking) {
            (false, _) => DialogMode::Closed,
            (true, false) => DialogMode::Open,
            (true, true) => DialogMode::Modal,
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, DialogMode::Closed)
    }
}

/// Brings `dialog` into `mode`. Calls are idempotent, since `showModal` throws
/// on a dialog that is already open.
pub fn sync_dialog(dialog: &HtmlDialogElement, mode: DialogMode) {
    match mode {
        DialogMode::Closed => {
            if dialog.open() {
                dialog.close()
            }
        }
        DialogMode::Open => {
            if !dialog.open() {
                dialog.show()
            }
        }
        DialogMode::Modal => {
            if !dialog.open() {
                if let Err(err) = dialog.show_modal() {
                    warn!("unable to open dialog modally: {err:?}");
                    dialog.show();
                }
            }
        }
    }
}
