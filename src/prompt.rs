use inquire::{validator::Validation, CustomUserError, Select, Text};
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum PromptError {
    #[error("Error occurred trying to read an answer from the terminal")]
    #[diagnostic(
        code(skela::prompt::backend),
        help("Interactive prompts need a terminal; run skela from an interactive shell")
    )]
    Backend {
        #[source]
        source: inquire::InquireError,
    },
}

/// Inline answer validator. An `Err` carries the message shown to the user;
/// the prompt layer rejects the input and asks again, so flows never see an
/// answer the validator refused.
pub type Validator = fn(&str) -> Result<(), String>;

/// The ask-a-question capability the dialogue flows are written against.
///
/// `Ok(None)` always means the user dismissed the prompt and is distinct
/// from an empty-string answer. Implementations answer pick requests with
/// one of the offered options; flows still check defensively where a miss
/// would be destructive.
pub trait Prompter {
    /// Free-text question with an optional inline validator.
    fn text(
        &mut self,
        message: &str,
        validator: Option<Validator>,
    ) -> Result<Option<String>, PromptError>;

    /// Single-selection pick list over a fixed set of labeled options.
    fn pick(&mut self, message: &str, options: &[&str]) -> Result<Option<String>, PromptError>;
}

/// [`Prompter`] backed by `inquire` prompts on the terminal. Esc maps to
/// `Ok(None)`; Ctrl-C and a missing TTY surface as [`PromptError`].
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn text(
        &mut self,
        message: &str,
        validator: Option<Validator>,
    ) -> Result<Option<String>, PromptError> {
        let mut prompt = Text::new(message);

        if let Some(validate) = validator {
            prompt = prompt.with_validator(
                move |input: &str| -> Result<Validation, CustomUserError> {
                    match validate(input) {
                        Ok(()) => Ok(Validation::Valid),
                        Err(message) => Ok(Validation::Invalid(message.into())),
                    }
                },
            );
        }

        prompt
            .prompt_skippable()
            .map_err(|error| PromptError::Backend { source: error })
    }

    fn pick(&mut self, message: &str, options: &[&str]) -> Result<Option<String>, PromptError> {
        let choices: Vec<String> = options.iter().map(|option| option.to_string()).collect();

        Select::new(message, choices)
            .prompt_skippable()
            .map_err(|error| PromptError::Backend { source: error })
    }
}
