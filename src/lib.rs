pub mod config;
pub mod error;
pub mod formatter;
pub mod handler;
pub mod llm;
pub mod profile;
pub mod prompt;
pub mod server;
pub mod shutdown;
pub mod tracker;
