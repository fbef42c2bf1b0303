//! UI screens.

mod app;
mod ledger_screen;
mod notification_popup;
pub mod utils;

pub use app::App;
pub use ledger_screen::{LedgerFocus, LedgerKeyResult, LedgerScreen, LedgerScreenState};
pub use notification_popup::NotificationPopup;
