use crate::{
    api::Outcome,
    errors::IoError,
    materialize::{create_empty_file, create_folder_and_files},
    notify::Notifier,
    prompt::{PromptError, Prompter},
};
use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum BuildError {
    #[error("I/O error within builder domain")]
    #[diagnostic(code(skela::builder::io))]
    Io(#[from] IoError),

    #[error("Error occurred trying to prompt user")]
    #[diagnostic(code(skela::builder::prompt))]
    Prompt(#[from] PromptError),
}

/// Extension pick list offered for every file slot; `other` opens a
/// free-text prompt.
const EXTENSIONS: [&str; 12] = [
    "html", "css", "js", "py", "md", "txt", "json", "xml", "c", "cpp", "java", "other",
];

const DEFAULT_FILE_NAME: &str = "main";
const DEFAULT_EXTENSION: &str = "txt";

/// Answer to a numeric prompt, before the per-prompt default is applied.
/// The subfolder-count prompt ends the dialogue on `Dismissed` and
/// `Empty`; the file-count prompts substitute zero for both.
enum CountAnswer {
    Dismissed,
    Empty,
    Value(u32),
}

/// One prompt step of the manual dialogue.
///
/// Every transition consumes one user answer, and filesystem effects run
/// on the transition that completes them, so dismissing a later step never
/// undoes earlier work.
#[derive(Debug)]
enum Step {
    BaseFileCount,
    BaseFile {
        slot: u32,
        count: u32,
    },
    SubfolderCount,
    SubfolderName {
        index: u32,
        total: u32,
    },
    SubfolderFileCount {
        index: u32,
        total: u32,
        name: String,
    },
    SubfolderFile {
        index: u32,
        total: u32,
        name: String,
        slot: u32,
        count: u32,
    },
    Refresh,
}

/// Accepts the empty string (use the prompt's default) or a non-negative
/// integer; everything else is rejected and re-asked at the prompt layer.
fn valid_count(input: &str) -> Result<(), String> {
    let trimmed = input.trim();

    if trimmed.is_empty() || trimmed.parse::<u32>().is_ok() {
        Ok(())
    } else {
        Err("Please enter a valid number".to_string())
    }
}

/// Runs the manual-mode dialogue and materializes folders and files as the
/// answers come in.
///
/// Dismissing the base-name prompt ends the flow before anything touches
/// disk; dismissing the subfolder-count prompt keeps whatever is already
/// created. A dismissed subfolder-name prompt skips that one subfolder and
/// the dialogue continues.
///
/// # Errors
///
/// Returns a [`BuildError`] if:
///
/// - The input provider fails (dismissing a prompt is not a failure).
/// - A directory or file cannot be created.
pub fn run_manual(
    prompter: &mut dyn Prompter,
    notifier: &dyn Notifier,
    workspace: Option<&Path>,
) -> Result<Outcome, BuildError> {
    let base = match prompter.text("Enter the base directory name for your project", None)? {
        Some(name) if !name.is_empty() => name,
        _ => return Ok(Outcome::Cancelled),
    };

    let Some(root) = workspace else {
        log::debug!("no workspace root available; leaving without side effects");
        return Ok(Outcome::NoWorkspace);
    };

    ManualBuilder {
        prompter,
        notifier,
        root,
        base,
    }
    .run()
}

struct ManualBuilder<'a> {
    prompter: &'a mut dyn Prompter,
    notifier: &'a dyn Notifier,
    root: &'a Path,
    base: String,
}

impl ManualBuilder<'_> {
    fn run(&mut self) -> Result<Outcome, BuildError> {
        let mut step = Step::BaseFileCount;

        loop {
            log::debug!("manual dialogue step: {:?}", step);

            step = match step {
                Step::BaseFileCount => {
                    let count = match self.ask_count(
                        "How many files do you want to create in the base directory? (default 0)",
                    )? {
                        CountAnswer::Value(count) => count,
                        CountAnswer::Dismissed | CountAnswer::Empty => 0,
                    };

                    create_folder_and_files(self.root, Path::new(&self.base), &[])?;

                    if count == 0 {
                        self.notify_batch(Path::new(&self.base), 0);
                        Step::SubfolderCount
                    } else {
                        Step::BaseFile { slot: 1, count }
                    }
                }

                Step::BaseFile { slot, count } => {
                    let folder = PathBuf::from(&self.base);

                    self.create_one_file(&folder, slot)?;

                    if slot == count {
                        self.notify_batch(&folder, count);
                        Step::SubfolderCount
                    } else {
                        Step::BaseFile {
                            slot: slot + 1,
                            count,
                        }
                    }
                }

                Step::SubfolderCount => {
                    match self.ask_count("How many subfolders do you want to create?")? {
                        // Required answer: dismissing or leaving it empty ends
                        // the dialogue, keeping everything created so far.
                        CountAnswer::Dismissed | CountAnswer::Empty => {
                            return Ok(Outcome::Cancelled);
                        }
                        CountAnswer::Value(0) => Step::Refresh,
                        CountAnswer::Value(total) => Step::SubfolderName { index: 1, total },
                    }
                }

                Step::SubfolderName { index, total } => {
                    let answer = self
                        .prompter
                        .text(&format!("Enter the name for subfolder {}", index), None)?;

                    match answer {
                        Some(name) if !name.is_empty() => {
                            Step::SubfolderFileCount { index, total, name }
                        }
                        // No name: skip this subfolder and keep going.
                        _ => self.next_subfolder(index, total),
                    }
                }

                Step::SubfolderFileCount { index, total, name } => {
                    let count = match self.ask_count(&format!(
                        "How many files in subfolder \"{}\"? (default 0)",
                        name
                    ))? {
                        CountAnswer::Value(count) => count,
                        CountAnswer::Dismissed | CountAnswer::Empty => 0,
                    };

                    let folder = Path::new(&self.base).join(&name);

                    create_folder_and_files(self.root, &folder, &[])?;

                    if count == 0 {
                        self.notify_batch(&folder, 0);
                        self.next_subfolder(index, total)
                    } else {
                        Step::SubfolderFile {
                            index,
                            total,
                            name,
                            slot: 1,
                            count,
                        }
                    }
                }

                Step::SubfolderFile {
                    index,
                    total,
                    name,
                    slot,
                    count,
                } => {
                    let folder = Path::new(&self.base).join(&name);

                    self.create_one_file(&folder, slot)?;

                    if slot == count {
                        self.notify_batch(&folder, count);
                        self.next_subfolder(index, total)
                    } else {
                        Step::SubfolderFile {
                            index,
                            total,
                            name,
                            slot: slot + 1,
                            count,
                        }
                    }
                }

                Step::Refresh => {
                    self.notifier.refresh();

                    return Ok(Outcome::Built(self.root.join(&self.base)));
                }
            };
        }
    }

    fn next_subfolder(&self, index: u32, total: u32) -> Step {
        if index == total {
            Step::Refresh
        } else {
            Step::SubfolderName {
                index: index + 1,
                total,
            }
        }
    }

    /// Numeric prompt backed by [`valid_count`]. The validator keeps
    /// non-numeric input from ever reaching the parse, and a misbehaving
    /// provider degrades to zero rather than a fabricated count.
    fn ask_count(&mut self, message: &str) -> Result<CountAnswer, BuildError> {
        let answer = self.prompter.text(message, Some(valid_count))?;

        Ok(match answer {
            None => CountAnswer::Dismissed,
            Some(raw) => {
                let trimmed = raw.trim();

                if trimmed.is_empty() {
                    CountAnswer::Empty
                } else {
                    CountAnswer::Value(trimmed.parse().unwrap_or(0))
                }
            }
        })
    }

    /// Collects one file descriptor (name, then extension) and creates the
    /// empty artifact inside `folder`, which is relative to the workspace
    /// root. Dismissed or empty answers fall back to `main` / `txt`.
    fn create_one_file(&mut self, folder: &Path, slot: u32) -> Result<(), BuildError> {
        let name = self
            .prompter
            .text(
                &format!(
                    "Enter the name for file {} in folder \"{}\" (default: main)",
                    slot,
                    folder.display()
                ),
                None,
            )?
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());

        let picked = self.prompter.pick(
            &format!(
                "Select or type the extension for file \"{}\" (default: txt)",
                name
            ),
            &EXTENSIONS,
        )?;

        let extension = match picked.as_deref() {
            Some("other") => self
                .prompter
                .text("Enter a custom file extension (e.g. ipynb)", None)?
                .filter(|extension| !extension.is_empty())
                .unwrap_or_else(|| DEFAULT_EXTENSION.to_string()),
            Some(extension) => extension.to_string(),
            None => DEFAULT_EXTENSION.to_string(),
        };

        let dir = self.root.join(folder);

        create_empty_file(&dir, &format!("{}.{}", name, extension))?;

        Ok(())
    }

    fn notify_batch(&self, folder: &Path, count: u32) {
        self.notifier.info(&format!(
            "Folder \"{}\" and {} files created at {}",
            folder.display(),
            count,
            self.root.join(folder).display()
        ));
    }
}
