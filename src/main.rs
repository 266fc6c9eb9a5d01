//! wix-customui - WiX custom UI sequence authoring

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use wix_customui::standard::{buttons, common_dialogs, dialogs, events};
use wix_customui::{CustomUI, CustomUIBuilder, Dialog, DialogAction, DialogSequence};

#[derive(Parser)]
#[command(name = "wix-customui")]
#[command(about = "Generate WiX custom UI sequence definitions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the standard post-license sequence around a custom dialog
    PostLicense {
        /// Id of the injected dialog
        #[arg(long, default_value = "CustomDlg")]
        dialog_id: String,

        /// Title of the injected dialog
        #[arg(long, default_value = "[ProductName] Setup")]
        title: String,

        /// Custom action to run when leaving the dialog, before showing
        /// InstallDirDlg
        #[arg(long)]
        custom_action: Option<String>,

        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Build a post-license sequence driven by an externally hosted dialog
    ClrDialog {
        /// Custom action that shows the hosted dialog
        #[arg(long)]
        action: String,

        /// Extra condition for advancing past the hosted dialog
        #[arg(long)]
        condition: Option<String>,

        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate the UI document from a JSON definition
    Generate {
        /// JSON definition file
        input: PathBuf,

        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print a starter JSON definition for the generate command
    Skeleton {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List standard dialog, button, and event names
    List,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::PostLicense {
            dialog_id,
            title,
            custom_action,
            output,
        } => cmd_post_license(&dialog_id, &title, custom_action.as_deref(), output.as_deref()),
        Commands::ClrDialog {
            action,
            condition,
            output,
        } => cmd_clr_dialog(&action, condition.as_deref(), output.as_deref()),
        Commands::Generate { input, output } => cmd_generate(&input, output.as_deref()),
        Commands::Skeleton { output } => cmd_skeleton(output.as_deref()),
        Commands::List => cmd_list(),
    }
}

fn cmd_post_license(
    dialog_id: &str,
    title: &str,
    custom_action: Option<&str>,
    output: Option<&Path>,
) -> Result<()> {
    let dialog = Dialog::standard(dialog_id, title);

    let on_next = custom_action.map(|action| {
        vec![
            DialogAction::execute_custom_action(action),
            DialogAction::show_dialog(dialogs::INSTALL_DIR_DLG),
        ]
    });

    let ui = CustomUIBuilder::build_post_license_dialog_ui(&dialog, on_next, None, None);
    write_output(&ui.to_xml(), output)
}

fn cmd_clr_dialog(action: &str, condition: Option<&str>, output: Option<&Path>) -> Result<()> {
    let ui = CustomUIBuilder::inject_post_license_clr_dialog(action, condition);
    write_output(&ui.to_xml(), output)
}

fn cmd_generate(input: &Path, output: Option<&Path>) -> Result<()> {
    let ui = CustomUI::load(input)
        .with_context(|| format!("Failed to load UI definition from {}", input.display()))?;
    write_output(&ui.to_xml(), output)
}

fn cmd_skeleton(output: Option<&Path>) -> Result<()> {
    let sequence = DialogSequence::new()
        .on(
            dialogs::WELCOME_DLG,
            buttons::NEXT,
            vec![DialogAction::show_dialog(dialogs::INSTALL_DIR_DLG)],
        )
        .on(
            dialogs::INSTALL_DIR_DLG,
            buttons::BACK,
            vec![DialogAction::show_dialog(dialogs::WELCOME_DLG)],
        );

    let ui: CustomUI = sequence.into();
    let json = ui.to_json().context("Failed to serialize skeleton")?;
    write_output(&json, output)
}

fn cmd_list() -> Result<()> {
    println!("Standard dialogs:\n");
    for dialog in [
        dialogs::EXIT_DIALOG,
        dialogs::WELCOME_DLG,
        dialogs::LICENSE_AGREEMENT_DLG,
        dialogs::INSTALL_DIR_DLG,
        dialogs::VERIFY_READY_DLG,
        dialogs::MAINTENANCE_WELCOME_DLG,
        dialogs::MAINTENANCE_TYPE_DLG,
    ] {
        println!("  {}", dialog);
    }

    println!("\nPredefined dialogs (DialogRef targets):\n");
    for dialog in common_dialogs::ALL {
        println!("  {}", dialog);
    }

    println!("\nButtons:\n");
    for button in [
        buttons::NEXT,
        buttons::BACK,
        buttons::CANCEL,
        buttons::FINISH,
        buttons::CHANGE_FOLDER,
        buttons::REPAIR,
        buttons::REMOVE,
    ] {
        println!("  {}", button);
    }

    println!("\nControl events:\n");
    for event in [
        events::NEW_DIALOG,
        events::END_DIALOG,
        events::SET_TARGET_PATH,
        events::DO_ACTION,
    ] {
        println!("  {}", event);
    }

    Ok(())
}

fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
