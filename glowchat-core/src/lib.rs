//! glowchat core
//!
//! UI-agnostic pieces of the chat screen: the append-only conversation with
//! its cancellable mock replies, and the ambient glow animation.

pub mod animation;
pub mod config;
pub mod constants;
pub mod conversation;
pub mod domain;

pub use animation::{
    AmbientDriver, DriverError, DriverState, Easing, FrameClock, Offset, Viewport,
};
pub use config::{AppConfig, ConfigError};
pub use conversation::{
    ChatSession, ConversationStore, ReplyScheduler, ReplyTicket, StoreEvent,
};
pub use domain::{Message, MessageId, Sender};
