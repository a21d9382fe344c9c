// Library entry so integration tests can reference the bot's modules.
pub mod commands;
pub mod config;
pub mod handler;
pub mod market;
pub mod model;
pub mod ui;
pub mod util;

pub use model::AppState;
