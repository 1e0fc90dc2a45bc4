pub mod config;
pub mod output;
pub mod record;
pub mod rubric;
pub mod scoring;
pub mod snapshot;
pub mod telemetry;
