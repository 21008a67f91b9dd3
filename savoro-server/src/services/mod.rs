//! Service Modules

pub mod gemini;
pub mod qr;

pub use gemini::{GeminiClient, GenerationError};
pub use qr::QrError;
