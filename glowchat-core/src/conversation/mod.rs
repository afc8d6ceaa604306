//! Conversation state
//!
//! - store.rs: append-only message list plus composer text, with change events
//! - reply.rs: cancellable deferred mock replies
//! - session.rs: ties both together for one screen lifetime

mod reply;
mod session;
mod store;

pub use reply::{ReplyScheduler, ReplyTicket};
pub use session::ChatSession;
pub use store::{ConversationStore, StoreEvent};
