mod input;
mod status_bar;
mod transaction_table;

pub use input::TextInput;
pub use status_bar::{KeyHint, StatusBar};
pub use transaction_table::TransactionTable;
