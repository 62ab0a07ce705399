pub mod config;
pub mod spotify;
pub mod utils;
