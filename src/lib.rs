pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod paths;
pub mod process;
pub mod reporting;
pub mod rules;
pub mod tally;
pub mod types;
