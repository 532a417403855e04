// src/cli.rs
use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf};

use crate::engine::config::{DEFAULT_SETTINGS_FILE, Settings};
use crate::infra::{logging, t};

pub mod commands;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` or `--lang=<VALUE>` argument.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        return args.get(pos + 1).cloned();
    }
    args.iter()
        .find_map(|arg| arg.strip_prefix("--lang=").map(str::to_string))
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("casework")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("settings")
                .long("settings")
                .help(t!("cli_settings", locale = locale).to_string())
                .value_name("SETTINGS")
                .default_value(DEFAULT_SETTINGS_FILE)
                .value_parser(clap::value_parser!(PathBuf))
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("copy")
                .about(t!("cmd_copy_about", locale = locale).to_string())
                .arg(
                    Arg::new("config")
                        .help(t!("arg_copy_config", locale = locale).to_string())
                        .value_name("CONFIG")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("verify")
                .about(t!("cmd_verify_about", locale = locale).to_string())
                .arg(
                    Arg::new("checksum")
                        .help(t!("arg_checksum", locale = locale).to_string())
                        .value_name("CHECKSUM")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("check-dir")
                        .short('d')
                        .help(t!("arg_check_dir", locale = locale).to_string())
                        .value_name("CHECK_DIR")
                        .default_value(".")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("cases")
                .about(t!("cmd_cases_about", locale = locale).to_string())
                .arg(
                    Arg::new("scratch")
                        .long("scratch")
                        .help(t!("arg_scratch", locale = locale).to_string())
                        .value_name("PATH")
                        .default_value(crate::engine::cases::RANDOM_FILE_NAME)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
}

/// Parses the command line, sets up language and logging, and dispatches
/// to the selected subcommand.
pub fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first, so help text is localized.
    let requested = pre_parse_language();
    let mut locale = crate::init_locale(requested.as_deref());

    let matches = build_cli(&locale).get_matches();

    let settings_path = required_path(&matches, "settings")?;
    let settings =
        Settings::load_or_default(&settings_path).with_context(|| t!("settings.load_failed").to_string())?;

    if requested.is_none() {
        if let Some(language) = settings.language.as_deref() {
            locale = crate::init_locale(Some(language));
        }
    }

    logging::init_tracing(&settings.logging)
        .with_context(|| t!("settings.logging_failed").to_string())?;
    tracing::debug!(settings = %settings_path.display(), locale = %locale, "casework starting");

    match matches.subcommand() {
        Some(("copy", copy_matches)) => {
            let config = required_path(copy_matches, "config")?;
            commands::copy::execute(&config);
        }
        Some(("verify", verify_matches)) => {
            let checksum = required_path(verify_matches, "checksum")?;
            let check_dir = required_path(verify_matches, "check-dir")?;
            commands::verify::execute(&checksum, &check_dir);
        }
        Some(("cases", cases_matches)) => {
            let scratch = required_path(cases_matches, "scratch")?;
            commands::cases::execute(scratch);
        }
        _ => {
            // `subcommand_required` makes clap print help and exit before this point.
        }
    }
    Ok(())
}

fn required_path(matches: &ArgMatches, id: &str) -> Result<PathBuf> {
    matches
        .get_one::<PathBuf>(id)
        .cloned()
        .with_context(|| format!("missing value for argument '{id}'"))
}
