//! Interactive console front end.

pub mod format;
pub mod input;
pub mod menu;
pub mod shell;
pub mod ui;

pub use shell::Shell;
