pub mod catalog;
pub mod repl;
