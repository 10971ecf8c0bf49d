pub mod config;
pub mod error;
pub mod generate;
pub mod output;
pub mod summary;

// Re-export key types for convenience
pub use error::{MartGenError, Result};
pub use generate::{generate_dataset, Dataset, GenerationParams};
