// lib.rs

pub mod config;
pub mod globals;
pub mod logging;

pub use config::Config;
pub use globals::CONFIG;
