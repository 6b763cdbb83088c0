pub mod config;
pub mod cutoff_table;
pub mod error;
pub mod http_client;
pub mod ladder;
pub mod league_fetch;
pub mod orchestrator;
pub mod platform;
pub mod snapshot;
