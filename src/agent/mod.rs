//! Agent system: bounded history plus tool dispatch per turn.

pub mod agent;
pub mod conversation;

pub use agent::ConversationAgent;
pub use conversation::Conversation;
