// Service exports
pub mod ai;

pub use ai::{AiClient, AiError, TextGenerator, extract_generated_text};
