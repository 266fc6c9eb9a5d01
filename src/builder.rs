//! Ready-made UI sequences around one custom dialog.

use crate::action::DialogAction;
use crate::dialog::Dialog;
use crate::sequence::CustomUI;
use crate::standard::{buttons, common_dialogs, conditions, dialogs};

/// Rank that keeps the Finish-button close handler last no matter what else
/// gets registered.
const FINISH_CLOSE_ORDER: i32 = 9999;

/// Factory for [`CustomUI`] instances wiring a custom dialog into the
/// standard wizard flow.
pub struct CustomUIBuilder;

impl CustomUIBuilder {
    /// Inject `custom_dialog` into the standard sequence right after the
    /// license step: Welcome -> License -> custom dialog -> InstallDir ->
    /// VerifyReady, with the browse-folder and maintenance-mode branches
    /// wired as usual.
    ///
    /// The `on_next`/`on_back`/`on_cancel` handler lists replace the
    /// defaults for the custom dialog's buttons; `None` keeps them
    /// (Next -> InstallDir, Back -> License, Cancel -> close with "Exit").
    pub fn build_post_license_dialog_ui(
        custom_dialog: &Dialog,
        on_next: Option<Vec<DialogAction>>,
        on_back: Option<Vec<DialogAction>>,
        on_cancel: Option<Vec<DialogAction>>,
    ) -> CustomUI {
        let custom_id = custom_dialog.id.as_str();

        let on_back = on_back
            .unwrap_or_else(|| vec![DialogAction::show_dialog(dialogs::LICENSE_AGREEMENT_DLG)]);
        let on_next =
            on_next.unwrap_or_else(|| vec![DialogAction::show_dialog(dialogs::INSTALL_DIR_DLG)]);
        let on_cancel =
            on_cancel.unwrap_or_else(|| vec![DialogAction::close_dialog().with_value("Exit")]);

        CustomUI::new()
            .with_dialog(custom_dialog.clone())
            .on(
                dialogs::EXIT_DIALOG,
                buttons::FINISH,
                vec![DialogAction::close_dialog().with_order(FINISH_CLOSE_ORDER)],
            )
            .on(
                dialogs::WELCOME_DLG,
                buttons::NEXT,
                vec![DialogAction::show_dialog(dialogs::LICENSE_AGREEMENT_DLG)],
            )
            .on(
                dialogs::LICENSE_AGREEMENT_DLG,
                buttons::BACK,
                vec![DialogAction::show_dialog(dialogs::WELCOME_DLG)],
            )
            .on(
                dialogs::LICENSE_AGREEMENT_DLG,
                buttons::NEXT,
                vec![DialogAction::show_dialog(custom_id).with_condition("LicenseAccepted = \"1\"")],
            )
            .on(custom_id, buttons::BACK, on_back)
            .on(custom_id, buttons::NEXT, on_next)
            .on(custom_id, buttons::CANCEL, on_cancel)
            .on(
                dialogs::INSTALL_DIR_DLG,
                buttons::BACK,
                vec![DialogAction::show_dialog(custom_id)],
            )
            .on(
                dialogs::INSTALL_DIR_DLG,
                buttons::NEXT,
                vec![
                    DialogAction::set_target_path(),
                    DialogAction::show_dialog(dialogs::VERIFY_READY_DLG),
                ],
            )
            .on(
                dialogs::INSTALL_DIR_DLG,
                buttons::CHANGE_FOLDER,
                vec![
                    DialogAction::set_property("_BrowseProperty", "[WIXUI_INSTALLDIR]"),
                    DialogAction::show_dialog(common_dialogs::BROWSE_DLG),
                ],
            )
            .on(
                dialogs::VERIFY_READY_DLG,
                buttons::BACK,
                vec![
                    DialogAction::show_dialog(dialogs::INSTALL_DIR_DLG)
                        .with_condition(conditions::NOT_INSTALLED),
                    DialogAction::show_dialog(dialogs::MAINTENANCE_TYPE_DLG)
                        .with_condition(conditions::INSTALLED),
                ],
            )
            .on(
                dialogs::MAINTENANCE_WELCOME_DLG,
                buttons::NEXT,
                vec![DialogAction::show_dialog(dialogs::MAINTENANCE_TYPE_DLG)],
            )
            .on(
                dialogs::MAINTENANCE_TYPE_DLG,
                buttons::BACK,
                vec![DialogAction::show_dialog(dialogs::MAINTENANCE_WELCOME_DLG)],
            )
            .on(
                dialogs::MAINTENANCE_TYPE_DLG,
                buttons::REPAIR,
                vec![DialogAction::show_dialog(dialogs::VERIFY_READY_DLG)],
            )
            .on(
                dialogs::MAINTENANCE_TYPE_DLG,
                buttons::REMOVE,
                vec![DialogAction::show_dialog(dialogs::VERIFY_READY_DLG)],
            )
    }

    /// Same skeleton as [`CustomUIBuilder::build_post_license_dialog_ui`],
    /// but the post-license step is an externally hosted dialog driven by
    /// the custom action `show_dialog_action`. The hosted dialog reports its
    /// outcome through the `Custom_UI_Command` property, which gates the
    /// next/back/abort transitions. No custom dialog is embedded.
    pub fn inject_post_license_clr_dialog(
        show_dialog_action: &str,
        go_next_condition: Option<&str>,
    ) -> CustomUI {
        let go_next = format!(
            "Custom_UI_Command = \"next\" AND  {}",
            go_next_condition.unwrap_or("\"1\"")
        );

        CustomUI::new()
            .on(
                dialogs::EXIT_DIALOG,
                buttons::FINISH,
                vec![DialogAction::close_dialog().with_order(FINISH_CLOSE_ORDER)],
            )
            .on(
                dialogs::WELCOME_DLG,
                buttons::NEXT,
                vec![DialogAction::show_dialog(dialogs::LICENSE_AGREEMENT_DLG)],
            )
            .on(
                dialogs::LICENSE_AGREEMENT_DLG,
                buttons::BACK,
                vec![DialogAction::show_dialog(dialogs::WELCOME_DLG)],
            )
            .on(
                dialogs::LICENSE_AGREEMENT_DLG,
                buttons::NEXT,
                vec![DialogAction::execute_custom_action(show_dialog_action)],
            )
            .on(
                dialogs::LICENSE_AGREEMENT_DLG,
                buttons::NEXT,
                vec![DialogAction::show_dialog(dialogs::INSTALL_DIR_DLG).with_condition(&go_next)],
            )
            .on(
                dialogs::LICENSE_AGREEMENT_DLG,
                buttons::NEXT,
                vec![DialogAction::close_dialog()
                    .with_value("Exit")
                    .with_condition("Custom_UI_Command = \"abort\"")
                    .with_order(2)],
            )
            .on(
                dialogs::INSTALL_DIR_DLG,
                buttons::BACK,
                vec![DialogAction::execute_custom_action(show_dialog_action)],
            )
            .on(
                dialogs::INSTALL_DIR_DLG,
                buttons::BACK,
                vec![DialogAction::show_dialog(dialogs::LICENSE_AGREEMENT_DLG)
                    .with_condition("Custom_UI_Command = \"back\"")],
            )
            .on(
                dialogs::INSTALL_DIR_DLG,
                buttons::NEXT,
                vec![
                    DialogAction::set_target_path(),
                    DialogAction::show_dialog(dialogs::VERIFY_READY_DLG),
                ],
            )
            .on(
                dialogs::INSTALL_DIR_DLG,
                buttons::CHANGE_FOLDER,
                vec![
                    DialogAction::set_property("_BrowseProperty", "[WIXUI_INSTALLDIR]"),
                    DialogAction::show_dialog(common_dialogs::BROWSE_DLG),
                ],
            )
            .on(
                dialogs::VERIFY_READY_DLG,
                buttons::BACK,
                vec![
                    DialogAction::show_dialog(dialogs::INSTALL_DIR_DLG)
                        .with_condition(conditions::NOT_INSTALLED),
                    DialogAction::show_dialog(dialogs::MAINTENANCE_TYPE_DLG)
                        .with_condition(conditions::INSTALLED),
                ],
            )
            .on(
                dialogs::MAINTENANCE_WELCOME_DLG,
                buttons::NEXT,
                vec![DialogAction::show_dialog(dialogs::MAINTENANCE_TYPE_DLG)],
            )
            .on(
                dialogs::MAINTENANCE_TYPE_DLG,
                buttons::BACK,
                vec![DialogAction::show_dialog(dialogs::MAINTENANCE_WELCOME_DLG)],
            )
            .on(
                dialogs::MAINTENANCE_TYPE_DLG,
                buttons::REPAIR,
                vec![DialogAction::show_dialog(dialogs::VERIFY_READY_DLG)],
            )
            .on(
                dialogs::MAINTENANCE_TYPE_DLG,
                buttons::REMOVE,
                vec![DialogAction::show_dialog(dialogs::VERIFY_READY_DLG)],
            )
    }
}
