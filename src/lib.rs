pub mod analysis;
pub mod args;
pub mod game;
pub mod models;
pub mod scoring;
pub mod server;
pub mod telemetry;
pub mod word;
pub mod wordlist;
