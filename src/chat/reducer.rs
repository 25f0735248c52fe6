use std::sync::Arc;

use crate::mvi::Reducer;

use super::action::ChatAction;
use super::state::{ChatState, ConversationId};

/// Chat slice reducer.
///
/// Only records what actions carry. Fetching the inbox or creating the
/// conversation on a server happens wherever the action is handled.
pub struct ChatReducer;

impl Reducer for ChatReducer {
    type State = ChatState;
    type Action = ChatAction;

    fn reduce(mut state: Self::State, action: Self::Action) -> Self::State {
        match action {
            ChatAction::LoadInbox => {
                state.inbox_loading = true;
            }
            ChatAction::InboxLoaded { items } => {
                state.inbox = Arc::new(items);
                state.inbox_loading = false;
            }
            ChatAction::NewChat { participants } => {
                let id = pending_id(&participants);
                if !state.pending.contains(&id) {
                    Arc::make_mut(&mut state.pending).push(id);
                }
            }
            ChatAction::MarkSuperseded {
                conversation_id,
                superseded_by,
            } => {
                if state.superseded_by.get(&conversation_id) != Some(&superseded_by) {
                    Arc::make_mut(&mut state.superseded_by).insert(conversation_id, superseded_by);
                }
            }
            ChatAction::AlwaysShow { conversation_id } => {
                if !state.always_show.contains(&conversation_id) {
                    Arc::make_mut(&mut state.always_show).insert(conversation_id);
                }
            }
        }
        state
    }
}

/// Placeholder key for a conversation that has not been created yet.
fn pending_id(participants: &[String]) -> ConversationId {
    ConversationId::new(format!("pending:{}", participants.join(",")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::InboxItem;

    #[test]
    fn load_inbox_sets_loading() {
        let state = ChatReducer::reduce(ChatState::default(), ChatAction::LoadInbox);
        assert!(state.inbox_loading);
    }

    #[test]
    fn inbox_loaded_replaces_inbox_and_clears_loading() {
        let state = ChatReducer::reduce(ChatState::default(), ChatAction::LoadInbox);
        let state = ChatReducer::reduce(
            state,
            ChatAction::InboxLoaded {
                items: vec![InboxItem::new("a", false)],
            },
        );
        assert!(!state.inbox_loading);
        assert_eq!(state.inbox.len(), 1);
    }

    #[test]
    fn new_chat_without_participants_adds_one_pending() {
        let state = ChatReducer::reduce(
            ChatState::default(),
            ChatAction::NewChat {
                participants: vec![],
            },
        );
        let state = ChatReducer::reduce(
            state,
            ChatAction::NewChat {
                participants: vec![],
            },
        );
        assert_eq!(*state.pending, vec![ConversationId::new("pending:")]);
    }

    #[test]
    fn new_chat_keeps_creation_order() {
        let state = ChatReducer::reduce(
            ChatState::default(),
            ChatAction::NewChat {
                participants: vec!["bob".into()],
            },
        );
        let state = ChatReducer::reduce(
            state,
            ChatAction::NewChat {
                participants: vec!["alice".into(), "carol".into()],
            },
        );
        assert_eq!(
            *state.pending,
            vec![
                ConversationId::new("pending:bob"),
                ConversationId::new("pending:alice,carol"),
            ]
        );
    }

    #[test]
    fn repeated_superseded_mark_keeps_identity() {
        let action = ChatAction::MarkSuperseded {
            conversation_id: "a".into(),
            superseded_by: "b".into(),
        };
        let state = ChatReducer::reduce(ChatState::default(), action.clone());
        let before = state.superseded_by.clone();
        let state = ChatReducer::reduce(state, action);
        assert!(Arc::ptr_eq(&before, &state.superseded_by));
    }

    #[test]
    fn always_show_inserts_once() {
        let action = ChatAction::AlwaysShow {
            conversation_id: "a".into(),
        };
        let state = ChatReducer::reduce(ChatState::default(), action.clone());
        let state = ChatReducer::reduce(state, action);
        assert_eq!(state.always_show.len(), 1);
    }
}
