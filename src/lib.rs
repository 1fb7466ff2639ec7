pub mod api;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod search;
pub mod ui;
