use serde::Serialize;

use crate::app::{AppAction, AppState};
use crate::binding::Container;
use crate::selector::EqualityMode;
use crate::store::SharedDispatch;

use super::action::ChatAction;
use super::selectors::{ConversationSelectors, Rows};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationListProps {
    pub rows: Rows,
}

pub struct ConversationListCallbacks {
    dispatch: SharedDispatch<AppAction>,
}

impl ConversationListCallbacks {
    pub fn load_inbox(&self) {
        self.dispatch.dispatch(ChatAction::LoadInbox.into());
    }

    /// Start a conversation with nobody selected yet.
    pub fn on_new_chat(&self) {
        self.dispatch.dispatch(
            ChatAction::NewChat {
                participants: Vec::new(),
            }
            .into(),
        );
    }
}

/// Binding for the conversation list.
pub struct ConversationList {
    selectors: ConversationSelectors,
}

impl ConversationList {
    pub fn new(equality: EqualityMode) -> Self {
        Self {
            selectors: ConversationSelectors::new(equality),
        }
    }

    pub fn selectors(&self) -> &ConversationSelectors {
        &self.selectors
    }
}

impl Default for ConversationList {
    fn default() -> Self {
        Self::new(EqualityMode::default())
    }
}

impl Container for ConversationList {
    type State = AppState;
    type Action = AppAction;
    type OwnProps = ();
    type Props = ConversationListProps;
    type Callbacks = ConversationListCallbacks;

    fn map_state(&self, state: &AppState, _own: &()) -> ConversationListProps {
        ConversationListProps {
            rows: self.selectors.rows(state),
        }
    }

    fn map_dispatch(&self, dispatch: SharedDispatch<AppAction>, _own: &()) -> Self::Callbacks {
        ConversationListCallbacks { dispatch }
    }
}
