pub mod commands;
pub mod config;
pub mod kv;
pub mod logging;
pub mod version;
