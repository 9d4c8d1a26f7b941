pub mod config;
pub mod core;
pub mod errors;
pub mod launcher;
pub mod logging;
pub mod menu;
pub mod prompter;
pub mod ui;
