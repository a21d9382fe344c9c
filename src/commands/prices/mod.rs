//! The `/prices` command: live Lost Ark market prices for one item.

pub mod run;
pub mod ui;

pub use run::{NAME, PricesArgs, register, run_slash};
