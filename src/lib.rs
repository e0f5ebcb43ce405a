// src/lib.rs
pub mod banner;
pub mod config;
pub mod errors;
pub mod prompts;
pub mod providers;
pub mod runner;
pub mod sink;
