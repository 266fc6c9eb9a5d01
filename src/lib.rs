//! wix-customui - WiX custom UI sequence authoring
//!
//! Builds the WiX `UI` element from a declarative dialog/control/action
//! model. Callers register event bindings with [`CustomUI::on`] (or start
//! from [`CustomUIBuilder`] for the standard post-license wiring), then
//! serialize the whole customization with [`CustomUI::to_xml`].
//!
//! # Example
//!
//! ```
//! use wix_customui::standard::{buttons, dialogs};
//! use wix_customui::{CustomUI, DialogAction};
//!
//! let ui = CustomUI::new().on(
//!     dialogs::WELCOME_DLG,
//!     buttons::NEXT,
//!     vec![DialogAction::show_dialog(dialogs::LICENSE_AGREEMENT_DLG)],
//! );
//! println!("{}", ui.to_xml());
//! ```

pub mod action;
pub mod builder;
pub mod dialog;
pub mod sequence;
pub mod standard;

pub use action::{ActionKind, DialogAction};
pub use builder::CustomUIBuilder;
pub use dialog::{Control, ControlType, Dialog};
pub use sequence::{CustomUI, CustomUiError, DialogSequence, Font, PublishingInfo};

pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
