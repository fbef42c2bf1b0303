pub mod ledger_controller;
pub mod notification_manager;

pub use ledger_controller::LedgerController;
pub use notification_manager::NotificationManager;
