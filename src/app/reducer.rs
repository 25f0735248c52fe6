use crate::chat::ChatReducer;
use crate::devices::{DevicesReducer, EntitiesReducer};
use crate::mvi::Reducer;

use super::action::AppAction;
use super::state::AppState;

/// Routes each action to the slice reducers that care about it.
///
/// Device actions touch two slices: the id list and the entity records.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        let AppState {
            chat,
            devices,
            entities,
        } = state;

        match action {
            AppAction::Chat(action) => AppState {
                chat: ChatReducer::reduce(chat, action),
                devices,
                entities,
            },
            AppAction::Devices(action) => AppState {
                chat,
                entities: EntitiesReducer::reduce(entities, action.clone()),
                devices: DevicesReducer::reduce(devices, action),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::ChatAction;
    use crate::devices::DevicesAction;
    use std::sync::Arc;

    #[test]
    fn chat_action_leaves_device_slices_untouched() {
        let state = AppState::default();
        let devices = state.devices.device_ids.clone();

        let next = AppReducer::reduce(state, ChatAction::LoadInbox.into());

        assert!(next.chat.inbox_loading);
        assert!(Arc::ptr_eq(&devices, &next.devices.device_ids));
    }

    #[test]
    fn device_action_leaves_chat_untouched() {
        let state = AppState::default();
        let inbox = state.chat.inbox.clone();

        let next = AppReducer::reduce(state, DevicesAction::LoadDevices.into());

        assert!(next.devices.waiting_for_server);
        assert!(Arc::ptr_eq(&inbox, &next.chat.inbox));
    }
}
