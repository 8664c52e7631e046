pub mod dialogs;
pub mod header;
pub mod history;
pub mod schedule;
