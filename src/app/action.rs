use crate::chat::ChatAction;
use crate::devices::DevicesAction;
use crate::mvi::Action;

/// Every action the root reducer understands.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    Chat(ChatAction),
    Devices(DevicesAction),
}

impl Action for AppAction {
    fn name(&self) -> &'static str {
        match self {
            AppAction::Chat(action) => action.name(),
            AppAction::Devices(action) => action.name(),
        }
    }
}

impl From<ChatAction> for AppAction {
    fn from(action: ChatAction) -> Self {
        AppAction::Chat(action)
    }
}

impl From<DevicesAction> for AppAction {
    fn from(action: DevicesAction) -> Self {
        AppAction::Devices(action)
    }
}
