pub mod cli;
pub mod config;
pub mod generator;
pub mod llm;
pub mod writer;

// Re-export commonly used types
pub use config::Config;
pub use generator::workflow::launch;
