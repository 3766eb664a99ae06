pub mod assistant;
pub mod responder;

pub use assistant::ModelAssistant;
pub use responder::{ChatMessage, ChatResponder, ChatTranscript};
