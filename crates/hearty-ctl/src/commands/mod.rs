pub mod config;
pub mod providers;
pub mod report;
pub mod snapshot;
