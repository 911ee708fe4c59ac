use clap::{crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, Command};
use log::LevelFilter;
use skela::{notify::ConsoleNotifier, prompt::TerminalPrompter};

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let is_verbose = matches.get_flag("verbose");

    let level = if is_verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let workspace = std::env::current_dir().ok();

    let mut prompter = TerminalPrompter;
    let notifier = ConsoleNotifier;

    let outcome = skela::api::run(&mut prompter, &notifier, workspace.as_deref())?;

    log::debug!("scaffolding command finished: {:?}", outcome);

    Ok(())
}
