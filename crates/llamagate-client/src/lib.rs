pub mod client;
pub mod config;
pub mod error;
pub mod manager;
pub mod modelfile;
pub mod types;

pub use client::Client;
pub use config::Config;
pub use error::ClientError;
pub use manager::ModelManager;
pub use modelfile::Modelfile;
pub use types::{ChatMessage, GenerationResult, ModelInfo};
