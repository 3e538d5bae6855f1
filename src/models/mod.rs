pub mod absence;
pub mod absence_type;
pub mod balance;
pub mod entry;
pub mod entry_type;
pub mod request;
pub mod schedule;
pub mod settings;
