//! The UI sequence registry and its serializer.
//!
//! [`CustomUI`] owns everything that ends up inside the WiX `UI` element:
//! text styles, UI properties, dialog references, embedded custom dialogs,
//! and the ordered list of dialog/control event bindings. [`DialogSequence`]
//! is the bare variant used to re-wire the stock dialogs without introducing
//! any custom ones.

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::action::DialogAction;
use crate::dialog::Dialog;
use crate::escape_xml;
use crate::standard::common_dialogs;

/// Rank assigned by [`DialogSequence`] to unranked handlers. High enough to
/// win over the runtime-supplied default handlers.
const OVERRIDE_ORDER: i32 = 5;

/// Errors from loading or saving a UI definition. Serialization to XML
/// itself never fails.
#[derive(Error, Debug)]
pub enum CustomUiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A text style referenced by dialog controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub face_name: String,
    pub size: f32,
    pub bold: bool,
    pub italic: bool,
    pub strike: bool,
    pub underline: bool,
}

impl Font {
    pub fn new(face_name: &str, size: f32) -> Self {
        Self {
            face_name: face_name.to_string(),
            size,
            bold: false,
            italic: false,
            strike: false,
            underline: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn strike(mut self) -> Self {
        self.strike = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }
}

/// The ordered actions bound to one (dialog, control) pair. At most one
/// record exists per distinct pair; repeated registration appends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishingInfo {
    pub dialog: String,
    pub control: String,
    pub actions: Vec<DialogAction>,
}

/// A WiX `UI` element under construction.
///
/// All collections are plain vectors so that emission order is exactly
/// registration order, which the output contract depends on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomUI {
    pub text_styles: Vec<(String, Font)>,
    pub properties: Vec<(String, String)>,
    pub dialog_refs: Vec<String>,
    pub custom_dialogs: Vec<Dialog>,
    pub sequence: Vec<PublishingInfo>,
}

impl Default for CustomUI {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomUI {
    /// A customization of the standard UI: stock text styles, the usual UI
    /// properties, and references to every predefined dialog.
    pub fn new() -> Self {
        Self {
            text_styles: vec![
                ("WixUI_Font_Normal".to_string(), Font::new("Tahoma", 8.0)),
                ("WixUI_Font_Bigger".to_string(), Font::new("Tahoma", 12.0)),
                ("WixUI_Font_Title".to_string(), Font::new("Tahoma", 9.0).bold()),
            ],
            properties: vec![
                ("DefaultUIFont".to_string(), "WixUI_Font_Normal".to_string()),
                ("WIXUI_INSTALLDIR".to_string(), "TARGETDIR".to_string()),
                ("PIDTemplate".to_string(), "####-####-####-####".to_string()),
                ("ARPNOMODIFY".to_string(), "1".to_string()),
            ],
            dialog_refs: common_dialogs::ALL.iter().map(|d| d.to_string()).collect(),
            custom_dialogs: Vec::new(),
            sequence: Vec::new(),
        }
    }

    /// An empty shell with no styles, properties, or dialog references.
    pub fn bare() -> Self {
        Self {
            text_styles: Vec::new(),
            properties: Vec::new(),
            dialog_refs: Vec::new(),
            custom_dialogs: Vec::new(),
            sequence: Vec::new(),
        }
    }

    /// Bind `actions` to the `control` of `dialog`. Repeated calls against
    /// the same pair append in call order; duplicate triples are kept and
    /// all emitted.
    pub fn on(mut self, dialog: &str, control: &str, actions: Vec<DialogAction>) -> Self {
        self.push_actions(dialog, control, actions);
        self
    }

    /// [`CustomUI::on`] against a custom dialog, resolved by its id.
    pub fn on_dialog(self, dialog: &Dialog, control: &str, actions: Vec<DialogAction>) -> Self {
        let id = dialog.id.clone();
        self.on(&id, control, actions)
    }

    fn push_actions(&mut self, dialog: &str, control: &str, actions: Vec<DialogAction>) {
        debug!("binding {} action(s) to {}/{}", actions.len(), dialog, control);
        let index = match self
            .sequence
            .iter()
            .position(|info| info.dialog == dialog && info.control == control)
        {
            Some(index) => index,
            None => {
                self.sequence.push(PublishingInfo {
                    dialog: dialog.to_string(),
                    control: control.to_string(),
                    actions: Vec::new(),
                });
                self.sequence.len() - 1
            }
        };
        self.sequence[index].actions.extend(actions);
    }

    /// Embed a custom dialog definition.
    pub fn with_dialog(mut self, dialog: Dialog) -> Self {
        self.custom_dialogs.push(dialog);
        self
    }

    /// Set a UI property, replacing any existing value for the same id.
    pub fn with_property(mut self, id: &str, value: &str) -> Self {
        match self.properties.iter_mut().find(|(key, _)| key == id) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.properties.push((id.to_string(), value.to_string())),
        }
        self
    }

    /// Register a named text style, replacing any existing style with the
    /// same id.
    pub fn with_text_style(mut self, id: &str, font: Font) -> Self {
        match self.text_styles.iter_mut().find(|(key, _)| key == id) {
            Some((_, existing)) => *existing = font,
            None => self.text_styles.push((id.to_string(), font)),
        }
        self
    }

    /// Declare an additional dialog reference.
    pub fn with_dialog_ref(mut self, dialog: &str) -> Self {
        self.dialog_refs.push(dialog.to_string());
        self
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn load(path: &Path) -> Result<Self, CustomUiError> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_json(&text)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), CustomUiError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Render the `UI` element. One pass, no validation: unknown ids flow
    /// through and surface downstream.
    pub fn to_xml(&self) -> String {
        debug!(
            "emitting UI element: {} style(s), {} property(ies), {} binding(s)",
            self.text_styles.len(),
            self.properties.len(),
            self.sequence.len()
        );
        let mut xml = String::new();
        xml.push_str("<UI>\n");

        for (id, font) in &self.text_styles {
            xml.push_str(&format!(
                "  <TextStyle Id=\"{}\" FaceName=\"{}\" Size=\"{}\" Bold=\"{}\" Italic=\"{}\" Strike=\"{}\" Underline=\"{}\" />\n",
                escape_xml(id),
                escape_xml(&font.face_name),
                font.size,
                yes_no(font.bold),
                yes_no(font.italic),
                yes_no(font.strike),
                yes_no(font.underline)
            ));
        }

        for (id, value) in &self.properties {
            xml.push_str(&format!(
                "  <Property Id=\"{}\" Value=\"{}\" />\n",
                escape_xml(id),
                escape_xml(value)
            ));
        }

        for dialog_id in &self.dialog_refs {
            xml.push_str(&format!("  <DialogRef Id=\"{}\" />\n", escape_xml(dialog_id)));
        }

        for info in &self.sequence {
            let siblings = info.actions.len();
            for (index, action) in info.actions.iter().enumerate() {
                xml.push_str(&format!(
                    "  <Publish Dialog=\"{}\" Control=\"{}\"",
                    escape_xml(&info.dialog),
                    escape_xml(&info.control)
                ));
                // Empty attributes are omitted, not emitted blank: the
                // runtime treats a missing attribute differently from "".
                if !action.name.is_empty() {
                    xml.push_str(&format!(" Event=\"{}\"", escape_xml(&action.name)));
                }
                if !action.value.is_empty() {
                    xml.push_str(&format!(" Value=\"{}\"", escape_xml(&action.value)));
                }
                if !action.property.is_empty() {
                    xml.push_str(&format!(" Property=\"{}\"", escape_xml(&action.property)));
                }
                if let Some(order) = action.order {
                    xml.push_str(&format!(" Order=\"{}\"", order));
                } else if siblings > 1 {
                    xml.push_str(&format!(" Order=\"{}\"", index + 1));
                }
                xml.push_str(&format!(">{}</Publish>\n", escape_xml(&action.condition)));
            }
        }

        for dialog in &self.custom_dialogs {
            dialog.write_xml(&mut xml, 1);
        }

        xml.push_str("</UI>\n");
        xml
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// A minimal UI customization carrying only explicitly registered bindings.
///
/// Starts with empty styles, properties, and dialog references, and assigns
/// rank 5 to every handler registered without one, so registered handlers
/// override the stock ones at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogSequence {
    ui: CustomUI,
}

impl Default for DialogSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogSequence {
    pub fn new() -> Self {
        Self { ui: CustomUI::bare() }
    }

    /// Bind `actions` to the `control` of `dialog`, pinning unranked
    /// handlers to rank 5.
    pub fn on(mut self, dialog: &str, control: &str, actions: Vec<DialogAction>) -> Self {
        let actions = actions
            .into_iter()
            .map(|action| {
                if action.order.is_none() {
                    action.with_order(OVERRIDE_ORDER)
                } else {
                    action
                }
            })
            .collect();
        self.ui = self.ui.on(dialog, control, actions);
        self
    }

    /// [`DialogSequence::on`] against a custom dialog, resolved by its id.
    pub fn on_dialog(self, dialog: &Dialog, control: &str, actions: Vec<DialogAction>) -> Self {
        let id = dialog.id.clone();
        self.on(&id, control, actions)
    }

    pub fn ui(&self) -> &CustomUI {
        &self.ui
    }

    pub fn to_xml(&self) -> String {
        self.ui.to_xml()
    }
}

impl From<DialogSequence> for CustomUI {
    fn from(sequence: DialogSequence) -> Self {
        sequence.ui
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standard::{buttons, dialogs};

    #[test]
    fn test_defaults() {
        let ui = CustomUI::new();
        assert_eq!(ui.text_styles.len(), 3);
        assert_eq!(ui.properties.len(), 4);
        assert_eq!(ui.dialog_refs.len(), 10);
        assert!(ui.custom_dialogs.is_empty());
        assert!(ui.sequence.is_empty());
    }

    #[test]
    fn test_welcome_next_roundtrip() {
        let ui = CustomUI::new().on(
            dialogs::WELCOME_DLG,
            buttons::NEXT,
            vec![DialogAction::show_dialog(dialogs::LICENSE_AGREEMENT_DLG)],
        );

        assert_eq!(ui.sequence.len(), 1);
        let info = &ui.sequence[0];
        assert_eq!(info.dialog, "WelcomeDlg");
        assert_eq!(info.control, "Next");
        assert_eq!(info.actions.len(), 1);
        let action = &info.actions[0];
        assert_eq!(action.name, "NewDialog");
        assert_eq!(action.value, "LicenseAgreementDlg");
        assert_eq!(action.condition, "1");
        assert!(action.order.is_none());

        let xml = ui.to_xml();
        assert!(xml.contains(
            "<Publish Dialog=\"WelcomeDlg\" Control=\"Next\" Event=\"NewDialog\" Value=\"LicenseAgreementDlg\">1</Publish>"
        ));
    }

    #[test]
    fn test_on_appends_across_calls() {
        let ui = CustomUI::new()
            .on("InstallDirDlg", "Next", vec![DialogAction::set_target_path()])
            .on(
                "InstallDirDlg",
                "Next",
                vec![DialogAction::show_dialog("VerifyReadyDlg")],
            );

        assert_eq!(ui.sequence.len(), 1);
        assert_eq!(ui.sequence[0].actions.len(), 2);
        assert_eq!(ui.sequence[0].actions[0].name, "SetTargetPath");
        assert_eq!(ui.sequence[0].actions[1].name, "NewDialog");
    }

    #[test]
    fn test_single_action_omits_order() {
        let ui = CustomUI::bare().on(
            "WelcomeDlg",
            "Next",
            vec![DialogAction::show_dialog("InstallDirDlg")],
        );
        let xml = ui.to_xml();
        assert!(!xml.contains("Order="));
    }

    #[test]
    fn test_positional_orders_for_siblings() {
        let ui = CustomUI::bare().on(
            "InstallDirDlg",
            "Next",
            vec![
                DialogAction::set_target_path(),
                DialogAction::show_dialog("VerifyReadyDlg"),
            ],
        );
        let xml = ui.to_xml();
        assert!(xml.contains("Event=\"SetTargetPath\" Value=\"[WIXUI_INSTALLDIR]\" Order=\"1\""));
        assert!(xml.contains("Event=\"NewDialog\" Value=\"VerifyReadyDlg\" Order=\"2\""));
    }

    #[test]
    fn test_explicit_order_survives_siblings() {
        let ui = CustomUI::bare().on(
            "LicenseAgreementDlg",
            "Next",
            vec![
                DialogAction::execute_custom_action("ShowDlg"),
                DialogAction::close_dialog()
                    .with_value("Exit")
                    .with_order(2)
                    .with_condition("Custom_UI_Command = \"abort\""),
                DialogAction::show_dialog("InstallDirDlg"),
            ],
        );
        let xml = ui.to_xml();
        // Unranked siblings still take their 1-based registration position.
        assert!(xml.contains("Event=\"DoAction\" Value=\"ShowDlg\" Order=\"1\""));
        assert!(xml.contains("Event=\"EndDialog\" Value=\"Exit\" Order=\"2\""));
        assert!(xml.contains("Event=\"NewDialog\" Value=\"InstallDirDlg\" Order=\"3\""));
    }

    #[test]
    fn test_explicit_order_kept_when_alone() {
        let ui = CustomUI::bare().on(
            "ExitDialog",
            "Finish",
            vec![DialogAction::close_dialog().with_order(9999)],
        );
        let xml = ui.to_xml();
        assert!(xml.contains("Order=\"9999\""));
    }

    #[test]
    fn test_duplicate_triples_preserved() {
        // Duplicates are kept and all emitted; accepted behavior, do not
        // deduplicate.
        let ui = CustomUI::bare()
            .on("WelcomeDlg", "Next", vec![DialogAction::show_dialog("InstallDirDlg")])
            .on("WelcomeDlg", "Next", vec![DialogAction::show_dialog("InstallDirDlg")]);
        assert_eq!(ui.sequence.len(), 1);
        assert_eq!(ui.sequence[0].actions.len(), 2);
        let xml = ui.to_xml();
        assert_eq!(xml.matches("Value=\"InstallDirDlg\"").count(), 2);
    }

    #[test]
    fn test_set_property_publish_omits_event() {
        let ui = CustomUI::bare().on(
            "InstallDirDlg",
            "ChangeFolder",
            vec![DialogAction::set_property("_BrowseProperty", "[WIXUI_INSTALLDIR]")],
        );
        let xml = ui.to_xml();
        assert!(xml.contains("Property=\"_BrowseProperty\""));
        assert!(xml.contains("Value=\"[WIXUI_INSTALLDIR]\""));
        assert!(!xml.contains("Event="));
    }

    #[test]
    fn test_text_styles_render_yes_no() {
        let xml = CustomUI::new().to_xml();
        assert!(xml.contains(
            "<TextStyle Id=\"WixUI_Font_Normal\" FaceName=\"Tahoma\" Size=\"8\" Bold=\"no\" Italic=\"no\" Strike=\"no\" Underline=\"no\" />"
        ));
        assert!(xml.contains(
            "<TextStyle Id=\"WixUI_Font_Title\" FaceName=\"Tahoma\" Size=\"9\" Bold=\"yes\" Italic=\"no\" Strike=\"no\" Underline=\"no\" />"
        ));
        assert!(!xml.contains("true"));
        assert!(!xml.contains("false"));
    }

    #[test]
    fn test_default_properties_and_refs_emitted() {
        let xml = CustomUI::new().to_xml();
        assert!(xml.contains("<Property Id=\"DefaultUIFont\" Value=\"WixUI_Font_Normal\" />"));
        assert!(xml.contains("<Property Id=\"WIXUI_INSTALLDIR\" Value=\"TARGETDIR\" />"));
        assert!(xml.contains("<Property Id=\"PIDTemplate\" Value=\"####-####-####-####\" />"));
        assert!(xml.contains("<Property Id=\"ARPNOMODIFY\" Value=\"1\" />"));
        assert!(xml.contains("<DialogRef Id=\"BrowseDlg\" />"));
        assert!(xml.contains("<DialogRef Id=\"UserExit\" />"));
    }

    #[test]
    fn test_condition_is_element_text() {
        let ui = CustomUI::bare().on(
            "VerifyReadyDlg",
            "Back",
            vec![DialogAction::show_dialog("InstallDirDlg").with_condition("NOT Installed")],
        );
        let xml = ui.to_xml();
        assert!(xml.contains(">NOT Installed</Publish>"));
    }

    #[test]
    fn test_condition_text_is_escaped() {
        let ui = CustomUI::bare().on(
            "CustomDlg",
            "Next",
            vec![DialogAction::show_dialog("InstallDirDlg")
                .with_condition("SERIALNUMBER_VALIDATED = \"TRUE\"")],
        );
        let xml = ui.to_xml();
        assert!(xml.contains(">SERIALNUMBER_VALIDATED = &quot;TRUE&quot;</Publish>"));
    }

    #[test]
    fn test_custom_dialog_embedded_last() {
        let ui = CustomUI::new()
            .with_dialog(Dialog::standard("ActivationDlg", "[ProductName] Setup"))
            .on("WelcomeDlg", "Next", vec![DialogAction::show_dialog("ActivationDlg")]);
        let xml = ui.to_xml();
        let dialog_pos = xml.find("<Dialog Id=\"ActivationDlg\"").unwrap();
        let publish_pos = xml.find("<Publish").unwrap();
        assert!(publish_pos < dialog_pos);
        assert!(xml.trim_end().ends_with("</UI>"));
    }

    #[test]
    fn test_on_dialog_resolves_id() {
        let dialog = Dialog::standard("ActivationDlg", "Activation");
        let ui = CustomUI::bare().on_dialog(
            &dialog,
            buttons::CANCEL,
            vec![DialogAction::close_dialog().with_value("Exit")],
        );
        assert_eq!(ui.sequence[0].dialog, "ActivationDlg");
    }

    #[test]
    fn test_with_property_replaces() {
        let ui = CustomUI::new().with_property("WIXUI_INSTALLDIR", "INSTALLFOLDER");
        assert_eq!(ui.properties.len(), 4);
        assert!(ui
            .properties
            .iter()
            .any(|(id, value)| id == "WIXUI_INSTALLDIR" && value == "INSTALLFOLDER"));
    }

    #[test]
    fn test_dialog_sequence_starts_bare() {
        let sequence = DialogSequence::new();
        assert!(sequence.ui().text_styles.is_empty());
        assert!(sequence.ui().properties.is_empty());
        assert!(sequence.ui().dialog_refs.is_empty());
    }

    #[test]
    fn test_dialog_sequence_assigns_order_five() {
        let sequence = DialogSequence::new()
            .on("WelcomeDlg", "Next", vec![DialogAction::show_dialog("InstallDirDlg")])
            .on("InstallDirDlg", "Back", vec![DialogAction::show_dialog("WelcomeDlg")]);

        for info in &sequence.ui().sequence {
            for action in &info.actions {
                assert_eq!(action.order, Some(5));
            }
        }
        assert!(sequence.to_xml().contains("Order=\"5\""));
    }

    #[test]
    fn test_dialog_sequence_keeps_explicit_order() {
        let sequence = DialogSequence::new().on(
            "ExitDialog",
            "Finish",
            vec![DialogAction::close_dialog().with_order(9999)],
        );
        assert_eq!(sequence.ui().sequence[0].actions[0].order, Some(9999));
    }

    #[test]
    fn test_json_roundtrip_preserves_sequence() {
        let ui = CustomUI::new()
            .on(
                "InstallDirDlg",
                "Next",
                vec![
                    DialogAction::set_target_path(),
                    DialogAction::show_dialog("VerifyReadyDlg"),
                ],
            )
            .on(
                "VerifyReadyDlg",
                "Back",
                vec![DialogAction::show_dialog("InstallDirDlg").with_condition("NOT Installed")],
            );

        let json = ui.to_json().unwrap();
        let restored = CustomUI::from_json(&json).unwrap();
        assert_eq!(restored.to_xml(), ui.to_xml());
    }
}
