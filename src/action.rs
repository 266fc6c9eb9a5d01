//! Dialog control actions.
//!
//! Each action becomes one `Publish` entry bound to a dialog control. The
//! constructors fix the reserved MSI event name for their kind; everything
//! else is an opaque string passed through to the output document verbatim.

use serde::{Deserialize, Serialize};

use crate::standard::events;

/// What a [`DialogAction`] does when its control is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    /// Navigate to another dialog.
    ShowDialog,
    /// Close the current dialog.
    CloseDialog,
    /// Set an installer property.
    SetProperty,
    /// Commit the selected installation directory.
    SetTargetPath,
    /// Run a custom action.
    ExecuteCustomAction,
    /// Any other control event, named by the caller.
    Generic,
}

/// One control event binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogAction {
    pub kind: ActionKind,
    /// MSI event name. Empty for property-setting actions, which carry the
    /// target in `property` instead.
    pub name: String,
    /// Target property id. Empty unless the action sets a property.
    pub property: String,
    pub value: String,
    /// MSI conditional expression gating the action. Never empty; "1" fires
    /// unconditionally.
    pub condition: String,
    /// Explicit evaluation rank. `None` means the serializer assigns one by
    /// registration position when siblings require it.
    pub order: Option<i32>,
}

impl DialogAction {
    fn new(kind: ActionKind, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
            property: String::new(),
            value: String::new(),
            condition: "1".to_string(),
            order: None,
        }
    }

    /// Navigate to `dialog` when the control is activated.
    pub fn show_dialog(dialog: &str) -> Self {
        let mut action = Self::new(ActionKind::ShowDialog, events::NEW_DIALOG);
        action.value = dialog.to_string();
        action
    }

    /// Close the current dialog with the conventional "Return" result.
    /// Override the result with [`DialogAction::with_value`], e.g. "Exit".
    pub fn close_dialog() -> Self {
        let mut action = Self::new(ActionKind::CloseDialog, events::END_DIALOG);
        action.value = "Return".to_string();
        action
    }

    /// Set installer property `property` to `value`. No event name is
    /// emitted for this kind.
    pub fn set_property(property: &str, value: &str) -> Self {
        let mut action = Self::new(ActionKind::SetProperty, "");
        action.property = property.to_string();
        action.value = value.to_string();
        action
    }

    /// Commit the install location from the standard `[WIXUI_INSTALLDIR]`
    /// property. Override the source with [`DialogAction::with_value`].
    pub fn set_target_path() -> Self {
        let mut action = Self::new(ActionKind::SetTargetPath, events::SET_TARGET_PATH);
        action.value = "[WIXUI_INSTALLDIR]".to_string();
        action
    }

    /// Run the custom action `action_id`.
    pub fn execute_custom_action(action_id: &str) -> Self {
        let mut action = Self::new(ActionKind::ExecuteCustomAction, events::DO_ACTION);
        action.value = action_id.to_string();
        action
    }

    /// A generic control event with a caller-supplied name.
    pub fn named(event: &str, value: &str) -> Self {
        let mut action = Self::new(ActionKind::Generic, event);
        action.value = value.to_string();
        action
    }

    /// Gate the action on an MSI conditional expression. An empty condition
    /// resolves back to "1".
    pub fn with_condition(mut self, condition: &str) -> Self {
        self.condition = if condition.is_empty() {
            "1".to_string()
        } else {
            condition.to_string()
        };
        self
    }

    /// Pin the action to an explicit evaluation rank.
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    /// Replace the action's value (dialog id, return result, property
    /// value, custom action id - per kind).
    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }
}
