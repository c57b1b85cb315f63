//! Channel model and registry
//!
//! # Concepts
//!
//! - **Channel**: a monitored communication source (an Outlook mailbox or a
//!   Slack channel)
//! - **Profile**: audience and data sources used to shape a channel's summaries
//! - **Registry**: the ordered, in-memory collection of channels for one session
//!
//! The registry is seeded at startup and mutated in place; nothing here is
//! written back to disk.

mod channel_registry;
mod types;

pub use channel_registry::ChannelRegistry;
pub use types::{Channel, ChannelId, ChannelKind, ChannelProfile};
