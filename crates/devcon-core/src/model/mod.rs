pub mod command;
pub mod log_entry;

pub use command::Command;
pub use log_entry::LogEntry;
