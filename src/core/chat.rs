use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, warn};

use crate::types::{ChatMessage, MessageOrigin};

/// Synthetic reply appended when a message fails, so the visual log never
/// shows a gap.
pub const APOLOGY_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// Where the session is in its request-response cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChatState {
    Idle,
    /// "Peer is composing": exactly one request outstanding.
    AwaitingReply { seq: u64 },
}

/// Receipt for an in-flight message; its sequence number must still match
/// when the reply is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingReply {
    seq: u64,
}

/// Ephemeral conversation with the assistant.
///
/// Strict request-response: the user message is appended optimistically,
/// the machine moves `Idle → AwaitingReply → Idle`, and at most one request
/// is in flight at a time. The session id is generated once from creation
/// time and sent unchanged with every message so the backend can keep
/// multi-turn context; it lives for the widget's lifetime and is never
/// persisted.
#[derive(Debug, Clone)]
pub struct ChatSession {
    id: String,
    log: Vec<ChatMessage>,
    state: ChatState,
    next_seq: u64,
}

impl ChatSession {
    pub fn new() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or(0);
        Self::with_id(format!("session_{millis}"))
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            log: Vec::new(),
            state: ChatState::Idle,
            next_seq: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.log
    }

    /// True while a reply is outstanding.
    pub fn is_composing(&self) -> bool {
        matches!(self.state, ChatState::AwaitingReply { .. })
    }

    /// Append the user message optimistically and enter `AwaitingReply`.
    ///
    /// Returns `None` without touching the log when the trimmed input is
    /// empty or another request is already in flight (single-flight).
    pub fn begin_send(&mut self, input: &str) -> Option<PendingReply> {
        let message = input.trim();
        if message.is_empty() {
            return None;
        }
        if self.is_composing() {
            warn!("refusing chat send while a reply is outstanding");
            return None;
        }

        self.next_seq += 1;
        let seq = self.next_seq;
        self.log.push(ChatMessage::user(message));
        self.state = ChatState::AwaitingReply { seq };
        Some(PendingReply { seq })
    }

    /// Apply the outcome of the request `pending` belongs to.
    ///
    /// A reply appends after its user message; a failure appends the
    /// apology instead. A stale receipt (sequence mismatch) is dropped.
    pub fn resolve(&mut self, pending: PendingReply, reply: Option<String>) -> bool {
        match self.state {
            ChatState::AwaitingReply { seq } if seq == pending.seq => {}
            _ => {
                debug!(seq = pending.seq, "dropping out-of-order chat reply");
                return false;
            }
        }

        match reply {
            Some(text) => self.log.push(ChatMessage::assistant(text)),
            None => self.log.push(ChatMessage::assistant(APOLOGY_REPLY)),
        }
        self.state = ChatState::Idle;
        true
    }

    /// Count of messages from a given origin.
    pub fn count_from(&self, origin: MessageOrigin) -> usize {
        self.log.iter().filter(|m| m.origin == origin).count()
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
