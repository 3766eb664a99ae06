use serde::Serialize;
use std::time::Duration;
use tracing::debug;

pub const GREETING: &str =
    "Hi! I am Campus Sphere AI. I can help you find the best hostels. Just ask!";
pub const GENERIC_REPLY: &str = "Currently, I have detailed information about Scholars Inn and Student Hub. Would you like to know more about them?";

/// A listing the responder can talk about
#[derive(Debug, Clone)]
struct KnownListing {
    name: &'static str,
    details: &'static str,
}

const KNOWN_LISTINGS: [KnownListing; 3] = [
    KnownListing {
        name: "Scholars Inn",
        details: "0.5 km from campus, ₹8,500/mo, located near the Library gate.",
    },
    KnownListing {
        name: "The Student Hub PG",
        details: "1.2 km from campus, ₹12,000/mo, features a Gym and High-speed WiFi.",
    },
    KnownListing {
        name: "Green View Residency",
        details: "2.0 km from campus, ₹15,000/mo, offers shared apartments.",
    },
];

impl KnownListing {
    /// First word of the name, lower-cased
    fn keyword(&self) -> String {
        self.name
            .split(' ')
            .next()
            .unwrap_or(self.name)
            .to_lowercase()
    }
}

/// Keyword-matching chat stub
#[derive(Debug, Clone)]
pub struct ChatResponder {
    delay: Duration,
}

impl Default for ChatResponder {
    fn default() -> Self {
        Self::new(Duration::from_millis(800))
    }
}

impl ChatResponder {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Reply without the artificial delay
    pub fn reply(&self, message: &str) -> String {
        let lowered = message.to_lowercase();
        let found = KNOWN_LISTINGS
            .iter()
            .find(|listing| lowered.contains(&listing.keyword()));

        match found {
            Some(listing) => {
                debug!("Chat matched {}", listing.name);
                format!(
                    "Yes, {} is an excellent choice. Details: {}",
                    listing.name, listing.details
                )
            }
            None => GENERIC_REPLY.to_string(),
        }
    }

    /// Reply after the configured delay
    pub async fn respond(&self, message: &str) -> String {
        tokio::time::sleep(self.delay).await;
        self.reply(message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub text: String,
    pub is_bot: bool,
}

/// Visible conversation, seeded with the greeting
#[derive(Debug, Clone, Serialize)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage {
                text: GREETING.to_string(),
                is_bot: true,
            }],
        }
    }
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append `input` and the bot's answer. Blank input is ignored.
    pub async fn send(&mut self, responder: &ChatResponder, input: &str) -> Option<String> {
        if input.trim().is_empty() {
            return None;
        }

        self.messages.push(ChatMessage {
            text: input.to_string(),
            is_bot: false,
        });

        let reply = responder.respond(input).await;
        self.messages.push(ChatMessage {
            text: reply.clone(),
            is_bot: true,
        });
        Some(reply)
    }
}
