//! Parley: a terminal chat agent with OpenAI function calling.
//!
//! Each user turn is sent to the chat completion endpoint together with a
//! fixed catalog of five tools (weather, news, system metrics, current time,
//! Wolfram Alpha). When the model asks for tools, they are dispatched locally
//! and their output becomes the reply.
//!
//! # Quick Start
//!
//! ```no_run
//! use parley::agent::ConversationAgent;
//! use parley::config::ChatConfig;
//!
//! # async fn example() -> parley::error::Result<()> {
//! let config = ChatConfig::from_env();
//! let mut agent = ConversationAgent::from_config(&config)?;
//! let reply = agent.process_message("What's the weather in Oslo?").await;
//! println!("{reply}");
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod provider;
pub mod services;
pub mod tools;
pub mod types;
