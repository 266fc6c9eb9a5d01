//! Name catalogs for the standard WiX dialog set.
//!
//! These identifiers are fixed by the WiX UI extension and the MSI runtime;
//! they must match the downstream schema exactly.

/// Standard wizard dialogs.
pub mod dialogs {
    pub const EXIT_DIALOG: &str = "ExitDialog";
    pub const WELCOME_DLG: &str = "WelcomeDlg";
    pub const LICENSE_AGREEMENT_DLG: &str = "LicenseAgreementDlg";
    pub const INSTALL_DIR_DLG: &str = "InstallDirDlg";
    pub const VERIFY_READY_DLG: &str = "VerifyReadyDlg";
    pub const MAINTENANCE_WELCOME_DLG: &str = "MaintenanceWelcomeDlg";
    pub const MAINTENANCE_TYPE_DLG: &str = "MaintenanceTypeDlg";
}

/// Predefined dialogs every custom UI references.
pub mod common_dialogs {
    pub const BROWSE_DLG: &str = "BrowseDlg";
    pub const DISK_COST_DLG: &str = "DiskCostDlg";
    pub const ERROR_DLG: &str = "ErrorDlg";
    pub const FATAL_ERROR: &str = "FatalError";
    pub const FILES_IN_USE: &str = "FilesInUse";
    pub const MSI_RM_FILES_IN_USE: &str = "MsiRMFilesInUse";
    pub const PREPARE_DLG: &str = "PrepareDlg";
    pub const PROGRESS_DLG: &str = "ProgressDlg";
    pub const RESUME_DLG: &str = "ResumeDlg";
    pub const USER_EXIT: &str = "UserExit";

    /// All predefined dialog ids, in declaration order.
    pub const ALL: [&str; 10] = [
        BROWSE_DLG,
        DISK_COST_DLG,
        ERROR_DLG,
        FATAL_ERROR,
        FILES_IN_USE,
        MSI_RM_FILES_IN_USE,
        PREPARE_DLG,
        PROGRESS_DLG,
        RESUME_DLG,
        USER_EXIT,
    ];
}

/// Standard dialog control (button) ids.
pub mod buttons {
    pub const NEXT: &str = "Next";
    pub const BACK: &str = "Back";
    pub const CANCEL: &str = "Cancel";
    pub const FINISH: &str = "Finish";
    pub const CHANGE_FOLDER: &str = "ChangeFolder";
    pub const REPAIR: &str = "RepairButton";
    pub const REMOVE: &str = "RemoveButton";
}

/// Reserved MSI control event names.
pub mod events {
    pub const NEW_DIALOG: &str = "NewDialog";
    pub const END_DIALOG: &str = "EndDialog";
    pub const SET_TARGET_PATH: &str = "SetTargetPath";
    pub const DO_ACTION: &str = "DoAction";
}

/// Common MSI conditional expressions.
pub mod conditions {
    pub const INSTALLED: &str = "Installed";
    pub const NOT_INSTALLED: &str = "NOT Installed";
    pub const ALWAYS: &str = "1";
}
