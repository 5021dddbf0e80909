pub mod actions;
pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod media;
pub mod ui;

// Re-export the discovery entrypoint at the crate root
pub use media::gather;
