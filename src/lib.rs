pub mod calculator;
pub mod config;
pub mod form;
pub mod message;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
