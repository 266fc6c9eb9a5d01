//! Custom dialog definitions embedded into the UI sequence.

use serde::{Deserialize, Serialize};

use crate::escape_xml;

/// A user-authored dialog injected into the standard wizard sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dialog {
    pub id: String,
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub controls: Vec<Control>,
}

impl Dialog {
    pub fn new(id: &str, title: &str, width: u32, height: u32) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            width,
            height,
            controls: Vec::new(),
        }
    }

    /// The standard 370x270 wizard page shell with Back/Next/Cancel buttons
    /// at the usual coordinates.
    pub fn standard(id: &str, title: &str) -> Self {
        Self::new(id, title, 370, 270)
            .with_control(Control::push_button("Back", 180, 243, 56, 17, "&Back"))
            .with_control(Control::push_button("Next", 236, 243, 56, 17, "&Next"))
            .with_control(Control::push_button("Cancel", 304, 243, 56, 17, "Cancel"))
    }

    pub fn with_control(mut self, control: Control) -> Self {
        self.controls.push(control);
        self
    }

    /// Render the `Dialog` element.
    pub fn to_xml(&self) -> String {
        let mut xml = String::new();
        self.write_xml(&mut xml, 0);
        xml
    }

    pub(crate) fn write_xml(&self, out: &mut String, indent: usize) {
        let pad = "  ".repeat(indent);
        out.push_str(&format!(
            "{}<Dialog Id=\"{}\" Width=\"{}\" Height=\"{}\" Title=\"{}\">\n",
            pad,
            escape_xml(&self.id),
            self.width,
            self.height,
            escape_xml(&self.title)
        ));
        for control in &self.controls {
            control.write_xml(out, indent + 1);
        }
        out.push_str(&format!("{}</Dialog>\n", pad));
    }
}

/// WiX dialog control types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlType {
    PushButton,
    Text,
    EditText,
    CheckBox,
    RadioButtonGroup,
    ComboBox,
    ListBox,
    ListView,
    DirectoryCombo,
    DirectoryList,
    VolumeCostList,
    ScrollableText,
    Bitmap,
    Icon,
    ProgressBar,
    Line,
    GroupBox,
}

impl ControlType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlType::PushButton => "PushButton",
            ControlType::Text => "Text",
            ControlType::EditText => "Edit",
            ControlType::CheckBox => "CheckBox",
            ControlType::RadioButtonGroup => "RadioButtonGroup",
            ControlType::ComboBox => "ComboBox",
            ControlType::ListBox => "ListBox",
            ControlType::ListView => "ListView",
            ControlType::DirectoryCombo => "DirectoryCombo",
            ControlType::DirectoryList => "DirectoryList",
            ControlType::VolumeCostList => "VolumeCostList",
            ControlType::ScrollableText => "ScrollableText",
            ControlType::Bitmap => "Bitmap",
            ControlType::Icon => "Icon",
            ControlType::ProgressBar => "ProgressBar",
            ControlType::Line => "Line",
            ControlType::GroupBox => "GroupBox",
        }
    }
}

/// One interactive element within a dialog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Control {
    pub id: String,
    pub control_type: ControlType,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub text: Option<String>,
    pub property: Option<String>,
    /// Extra attributes emitted verbatim, in insertion order.
    pub attributes: Vec<(String, String)>,
}

impl Control {
    pub fn new(id: &str, control_type: ControlType, x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            id: id.to_string(),
            control_type,
            x,
            y,
            width,
            height,
            text: None,
            property: None,
            attributes: Vec::new(),
        }
    }

    pub fn push_button(id: &str, x: u32, y: u32, width: u32, height: u32, text: &str) -> Self {
        let mut control = Self::new(id, ControlType::PushButton, x, y, width, height);
        control.text = Some(text.to_string());
        control
    }

    pub fn text(id: &str, x: u32, y: u32, width: u32, height: u32, text: &str) -> Self {
        let mut control = Self::new(id, ControlType::Text, x, y, width, height);
        control.text = Some(text.to_string());
        control
    }

    pub fn edit_text(id: &str, x: u32, y: u32, width: u32, height: u32, property: &str) -> Self {
        let mut control = Self::new(id, ControlType::EditText, x, y, width, height);
        control.property = Some(property.to_string());
        control
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    pub(crate) fn write_xml(&self, out: &mut String, indent: usize) {
        let pad = "  ".repeat(indent);
        out.push_str(&format!(
            "{}<Control Id=\"{}\" Type=\"{}\" X=\"{}\" Y=\"{}\" Width=\"{}\" Height=\"{}\"",
            pad,
            escape_xml(&self.id),
            self.control_type.as_str(),
            self.x,
            self.y,
            self.width,
            self.height
        ));
        if let Some(ref text) = self.text {
            out.push_str(&format!(" Text=\"{}\"", escape_xml(text)));
        }
        if let Some(ref property) = self.property {
            out.push_str(&format!(" Property=\"{}\"", escape_xml(property)));
        }
        for (name, value) in &self.attributes {
            out.push_str(&format!(" {}=\"{}\"", name, escape_xml(value)));
        }
        out.push_str(" />\n");
    }
}
