use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::mvi::StateTree;

/// Opaque conversation key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(String);

impl ConversationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl From<&str> for ConversationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One inbox row as delivered by the inbox load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboxItem {
    pub conversation_id: ConversationId,
    /// Conversation has no messages yet.
    #[serde(default)]
    pub is_empty: bool,
}

impl InboxItem {
    pub fn new(conversation_id: impl Into<String>, is_empty: bool) -> Self {
        Self {
            conversation_id: ConversationId::new(conversation_id),
            is_empty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatState {
    pub inbox: Arc<Vec<InboxItem>>,
    /// Conversation → the conversation that replaced it.
    pub superseded_by: Arc<HashMap<ConversationId, ConversationId>>,
    /// Shown even when empty.
    pub always_show: Arc<HashSet<ConversationId>>,
    /// Conversations started locally and not yet in the inbox, in creation order.
    pub pending: Arc<Vec<ConversationId>>,
    pub inbox_loading: bool,
}

impl StateTree for ChatState {}
