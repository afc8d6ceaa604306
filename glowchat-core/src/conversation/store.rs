//! Conversation store

use crate::constants::SEED_MESSAGE_ID;
use crate::domain::{Message, MessageId, Sender};
use tokio::sync::broadcast;
use tracing::debug;

const EVENT_CAPACITY: usize = 64;

/// Change notification for the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    MessageAppended(Message),
    ComposerChanged(String),
}

/// Append-only ordered messages plus the unsent composer text
pub struct ConversationStore {
    messages: Vec<Message>,
    composer: String,
    events: broadcast::Sender<StoreEvent>,
}

impl ConversationStore {
    /// Store seeded with one bot greeting
    pub fn new(greeting: impl Into<String>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            messages: vec![Message::new(
                MessageId::from(SEED_MESSAGE_ID),
                greeting,
                Sender::Bot,
            )],
            composer: String::new(),
            events,
        }
    }

    /// Oldest first
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn composer(&self) -> &str {
        &self.composer
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Unconditional replace
    pub fn set_composer_text(&mut self, text: impl Into<String>) {
        self.composer = text.into();
        self.emit(StoreEvent::ComposerChanged(self.composer.clone()));
    }

    /// Appends `text` untrimmed as a user message and clears the composer.
    /// Blank input is ignored and returns `None`.
    pub fn submit(&mut self, text: &str) -> Option<&Message> {
        if text.trim().is_empty() {
            return None;
        }

        self.append(Message::user(text));
        if !self.composer.is_empty() {
            self.set_composer_text(String::new());
        }
        self.messages.last()
    }

    pub fn append_bot(&mut self, text: impl Into<String>) -> &Message {
        self.append(Message::bot(text))
    }

    fn append(&mut self, message: Message) -> &Message {
        debug!(id = %message.id(), sender = ?message.sender(), "Message appended");
        self.emit(StoreEvent::MessageAppended(message.clone()));
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    fn emit(&self, event: StoreEvent) {
        // No subscribers is fine
        let _ = self.events.send(event);
    }
}
