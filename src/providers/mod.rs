pub mod gemini;
pub mod traits;
pub mod types;

pub use gemini::GeminiClient;
pub use traits::GenerativeModel;
pub use types::GenerationRequest;
