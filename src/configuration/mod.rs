pub mod config;
pub mod initial;
