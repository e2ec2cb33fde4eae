pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod progress;
pub mod reader;
pub mod runner;
pub mod selector;
