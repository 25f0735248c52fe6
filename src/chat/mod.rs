//! Conversation list feature.
//!
//! - `state.rs` - Inbox slice of the state tree
//! - `action.rs` - Inbox and new-chat actions
//! - `reducer.rs` - Records what the actions carry
//! - `selectors.rs` - Filtered inbox and row derivation
//! - `container.rs` - Binding for the conversation list component

mod action;
mod container;
mod reducer;
mod selectors;
mod state;

pub use action::ChatAction;
pub use container::{ConversationList, ConversationListCallbacks, ConversationListProps};
pub use reducer::ChatReducer;
pub use selectors::{
    filter_inbox, get_always_show, get_inbox, get_pending, get_superseded_by, merge_rows,
    ConversationSelectors, FilteredInbox, Rows,
};
pub use state::{ChatState, ConversationId, InboxItem};
