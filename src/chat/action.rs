use crate::mvi::Action;

use super::state::{ConversationId, InboxItem};

#[derive(Debug, Clone, PartialEq)]
pub enum ChatAction {
    /// Request the inbox.
    LoadInbox,

    /// Inbox arrived.
    InboxLoaded { items: Vec<InboxItem> },

    /// Start a conversation with the given participants.
    NewChat { participants: Vec<String> },

    /// `conversation_id` was replaced by `superseded_by`.
    MarkSuperseded {
        conversation_id: ConversationId,
        superseded_by: ConversationId,
    },

    /// Keep `conversation_id` visible even while it is empty.
    AlwaysShow { conversation_id: ConversationId },
}

impl Action for ChatAction {
    fn name(&self) -> &'static str {
        match self {
            ChatAction::LoadInbox => "chat/load_inbox",
            ChatAction::InboxLoaded { .. } => "chat/inbox_loaded",
            ChatAction::NewChat { .. } => "chat/new_chat",
            ChatAction::MarkSuperseded { .. } => "chat/mark_superseded",
            ChatAction::AlwaysShow { .. } => "chat/always_show",
        }
    }
}
