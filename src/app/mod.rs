pub mod action;
pub mod command;
pub mod config;
pub mod input;
pub mod logging;
pub mod r#loop;
pub mod reducer;
pub mod state;
pub mod ui;
