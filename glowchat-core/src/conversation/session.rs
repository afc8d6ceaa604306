//! One screen's conversation: store plus its deferred replies

use super::reply::{ReplyScheduler, ReplyTicket};
use super::store::{ConversationStore, StoreEvent};
use crate::config::ChatConfig;
use crate::domain::Message;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

/// Conversation owned by a single screen.
///
/// Must be driven from inside a tokio runtime: [`ChatSession::submit`]
/// spawns the reply timer.
pub struct ChatSession {
    store: ConversationStore,
    replies: ReplyScheduler,
    reply_text: String,
    torn_down: bool,
}

impl ChatSession {
    pub fn new(config: &ChatConfig) -> Self {
        Self {
            store: ConversationStore::new(config.greeting.clone()),
            replies: ReplyScheduler::new(config.reply_delay),
            reply_text: config.reply_text.clone(),
            torn_down: false,
        }
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    pub fn messages(&self) -> &[Message] {
        self.store.messages()
    }

    pub fn composer(&self) -> &str {
        self.store.composer()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.store.subscribe()
    }

    pub fn set_composer_text(&mut self, text: impl Into<String>) {
        if self.torn_down {
            return;
        }
        self.store.set_composer_text(text);
    }

    /// Appends the user message now and owes one bot reply after the delay.
    /// Blank input, or any input after teardown, does nothing.
    pub fn submit(&mut self, text: &str) -> Option<ReplyTicket> {
        if self.torn_down {
            warn!("Submit ignored after teardown");
            return None;
        }

        let message = self.store.submit(text)?;
        debug!(id = %message.id(), chars = text.chars().count(), "User message submitted");
        self.replies.schedule()
    }

    /// Submits whatever is in the composer
    pub fn submit_composer(&mut self) -> Option<ReplyTicket> {
        let text = self.store.composer().to_string();
        self.submit(&text)
    }

    /// Replies owed but not yet appended
    pub fn pending_replies(&self) -> usize {
        self.replies.pending()
    }

    /// Waits for the next owed reply and appends it.
    /// `None` when no reply is owed.
    pub async fn next_reply(&mut self) -> Option<&Message> {
        let ticket = self.replies.next_due().await?;
        Some(self.append_reply(ticket))
    }

    /// Appends every reply that has come due; returns how many were appended
    pub fn apply_due_replies(&mut self) -> usize {
        let mut applied = 0;
        while let Some(ticket) = self.replies.try_next_due() {
            self.append_reply(ticket);
            applied += 1;
        }
        applied
    }

    /// Cancels owed replies. The session accepts no further mutation.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.replies.cancel_all();
        info!(messages = self.store.len(), "Chat session torn down");
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    fn append_reply(&mut self, ticket: ReplyTicket) -> &Message {
        debug!(%ticket, "Deferred reply delivered");
        self.store.append_bot(self.reply_text.clone())
    }
}
