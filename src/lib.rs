pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fetch;
pub mod fetcher;
pub mod installer;
pub mod logging;
pub mod manifest;
pub mod paths;
