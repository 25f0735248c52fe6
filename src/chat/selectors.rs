//! Inbox derivations.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::app::AppState;
use crate::selector::{EqualityMode, Memo};

use super::state::{ConversationId, InboxItem};

/// Visible inbox conversation keys.
pub type FilteredInbox = Arc<Vec<ConversationId>>;

/// Pending conversations followed by the visible inbox.
pub type Rows = Arc<Vec<ConversationId>>;

type InboxInputs = (
    Arc<Vec<InboxItem>>,
    Arc<HashMap<ConversationId, ConversationId>>,
    Arc<HashSet<ConversationId>>,
);
type RowsInputs = (FilteredInbox, Arc<Vec<ConversationId>>);

pub fn get_inbox(state: &AppState) -> Arc<Vec<InboxItem>> {
    state.chat.inbox.clone()
}

pub fn get_superseded_by(state: &AppState) -> Arc<HashMap<ConversationId, ConversationId>> {
    state.chat.superseded_by.clone()
}

pub fn get_always_show(state: &AppState) -> Arc<HashSet<ConversationId>> {
    state.chat.always_show.clone()
}

pub fn get_pending(state: &AppState) -> Arc<Vec<ConversationId>> {
    state.chat.pending.clone()
}

/// Keep an item if it has messages or is pinned visible, and nobody
/// superseded it. Order is preserved.
pub fn filter_inbox(
    inbox: &[InboxItem],
    superseded_by: &HashMap<ConversationId, ConversationId>,
    always_show: &HashSet<ConversationId>,
) -> Vec<ConversationId> {
    inbox
        .iter()
        .filter(|item| !item.is_empty || always_show.contains(&item.conversation_id))
        .filter(|item| !superseded_by.contains_key(&item.conversation_id))
        .map(|item| item.conversation_id.clone())
        .collect()
}

/// Pending rows first, then the filtered inbox.
pub fn merge_rows(pending: &[ConversationId], filtered: &[ConversationId]) -> Vec<ConversationId> {
    pending.iter().chain(filtered).cloned().collect()
}

/// Memoized selectors for the conversation list.
pub struct ConversationSelectors {
    filtered_inbox: Arc<Memo<AppState, InboxInputs, FilteredInbox, EqualityMode>>,
    rows: Memo<AppState, RowsInputs, Rows, EqualityMode>,
}

impl ConversationSelectors {
    pub fn new(equality: EqualityMode) -> Self {
        let filtered_inbox = Arc::new(Memo::with_equality(
            equality,
            |state: &AppState| {
                (
                    get_inbox(state),
                    get_superseded_by(state),
                    get_always_show(state),
                )
            },
            |(inbox, superseded_by, always_show): &InboxInputs| {
                Arc::new(filter_inbox(inbox, superseded_by, always_show))
            },
        ));

        let upstream = filtered_inbox.clone();
        let rows = Memo::with_equality(
            equality,
            move |state: &AppState| (upstream.select(state), get_pending(state)),
            |(filtered, pending): &RowsInputs| Arc::new(merge_rows(pending, filtered)),
        );

        Self {
            filtered_inbox,
            rows,
        }
    }

    pub fn filtered_inbox(&self, state: &AppState) -> FilteredInbox {
        self.filtered_inbox.select(state)
    }

    pub fn rows(&self, state: &AppState) -> Rows {
        self.rows.select(state)
    }

    pub fn filtered_inbox_recomputations(&self) -> u64 {
        self.filtered_inbox.recomputations()
    }

    pub fn rows_recomputations(&self) -> u64 {
        self.rows.recomputations()
    }
}

impl Default for ConversationSelectors {
    fn default() -> Self {
        Self::new(EqualityMode::default())
    }
}
