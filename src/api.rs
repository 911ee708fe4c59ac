use crate::{
    builder::{self, BuildError},
    catalog::{self, CatalogError},
    notify::Notifier,
    prompt::{PromptError, Prompter},
};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum SkelaError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Prompt(#[from] PromptError),
}

/// How a scaffolding run ended.
///
/// Only `Built` implies a filesystem change, and even then a dialogue
/// cancelled partway through may already have created some of its folders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The project tree was created rooted at the contained path.
    Built(PathBuf),
    /// The user dismissed a prompt that the flow cannot continue without.
    Cancelled,
    /// No workspace root was available to create anything under.
    NoWorkspace,
}

pub const TEMPLATE_SETUP: &str = "Template Setup";
pub const MANUAL_SETUP: &str = "Manual Setup";

/// Asks whether to scaffold from the template catalog or through the manual
/// dialogue, then runs the chosen flow against `workspace`.
///
/// # Errors
///
/// Returns a [`SkelaError`] if:
///
/// - User prompts fail (dismissing a prompt cancels instead).
/// - A directory or file cannot be created or written to.
pub fn run(
    prompter: &mut dyn Prompter,
    notifier: &dyn Notifier,
    workspace: Option<&Path>,
) -> Result<Outcome, SkelaError> {
    let mode = prompter.pick(
        "Choose a method to create your project directory",
        &[TEMPLATE_SETUP, MANUAL_SETUP],
    )?;

    match mode.as_deref() {
        Some(TEMPLATE_SETUP) => Ok(catalog::run_template(prompter, notifier, workspace)?),
        Some(MANUAL_SETUP) => Ok(builder::run_manual(prompter, notifier, workspace)?),
        Some(other) => {
            log::warn!("unrecognized setup mode: {}", other);

            Ok(Outcome::Cancelled)
        }
        None => Ok(Outcome::Cancelled),
    }
}
