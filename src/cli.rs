// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf, process::ExitCode};

use tracing::debug;

use crate::core::config::EngineConfig;
use crate::infra::{logger, t};

pub mod commands;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` or `--lang=<VALUE>` argument.
fn pre_parse_language(args: &[String]) -> Option<String> {
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        if let Some(lang) = args.get(pos + 1) {
            return Some(lang.clone());
        }
    }
    args.iter()
        .find_map(|arg| arg.strip_prefix("--lang="))
        .map(str::to_string)
}

/// Pre-parses the configuration path so the config's language can be applied
/// to the help text before the full CLI is built. Accepts `--config PATH`, `--config=PATH`,
/// `-c PATH`, `-cPATH` and `-c=PATH`.
fn pre_parse_config(args: &[String]) -> Option<PathBuf> {
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--" {
            break;
        }
        if arg == "--config" || arg == "-c" {
            return iter.next().map(PathBuf::from);
        }
        if let Some(path) = arg.strip_prefix("--config=") {
            return Some(PathBuf::from(path));
        }
        if let Some(joined) = arg.strip_prefix("-c").filter(|rest| !rest.is_empty()) {
            return Some(PathBuf::from(joined.strip_prefix('=').unwrap_or(joined)));
        }
    }
    None
}

/// Splits a `name=value` pair given to `--var`.
fn parse_var(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got '{}'", raw)),
    }
}

/// Arguments shared by `resolve` and `candidates`.
fn context_args(locale: &str) -> [Arg; 4] {
    [
        Arg::new("component")
            .long("component")
            .help(t!("arg_component", locale = locale).to_string())
            .value_name("COMPONENT")
            .default_value("")
            .action(ArgAction::Set),
        Arg::new("action")
            .long("action")
            .short('a')
            .help(t!("arg_action", locale = locale).to_string())
            .value_name("ACTION")
            .required(true)
            .action(ArgAction::Set),
        Arg::new("status")
            .long("status")
            .short('s')
            .help(t!("arg_status", locale = locale).to_string())
            .value_name("STATUS")
            .value_parser(["success", "failure"])
            .default_value("success")
            .action(ArgAction::Set),
        Arg::new("resource")
            .long("resource")
            .help(t!("arg_resource", locale = locale).to_string())
            .value_name("RESOURCE")
            .action(ArgAction::Set),
    ]
}

fn build_cli(locale: &str) -> Command {
    Command::new("flash-resolver")
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
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("arg_config", locale = locale).to_string())
                .value_name("CONFIG")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help(t!("arg_verbose", locale = locale).to_string())
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("resolve")
                .about(t!("cmd_resolve_about", locale = locale).to_string())
                .args(context_args(locale))
                .arg(
                    Arg::new("var")
                        .long("var")
                        .help(t!("arg_var", locale = locale).to_string())
                        .value_name("NAME=VALUE")
                        .value_parser(parse_var)
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("default")
                        .long("default")
                        .help(t!("arg_default", locale = locale).to_string())
                        .value_name("TEXT")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("key")
                        .long("key")
                        .help(t!("arg_key", locale = locale).to_string())
                        .value_name("KEY")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("fallback")
                        .long("fallback")
                        .help(t!("arg_fallback", locale = locale).to_string())
                        .value_name("KEY")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("catalog")
                        .long("catalog")
                        .help(t!("arg_catalog", locale = locale).to_string())
                        .value_name("DIR")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help(t!("arg_json", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("explain")
                        .long("explain")
                        .help(t!("arg_explain", locale = locale).to_string())
                        .conflicts_with("json")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("candidates")
                .about(t!("cmd_candidates_about", locale = locale).to_string())
                .args(context_args(locale)),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cmd_init_about", locale = locale).to_string())
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .help(t!("arg_init_dir", locale = locale).to_string())
                        .value_name("DIR")
                        .default_value(".")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help(t!("arg_force", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

/// Parses the command line and dispatches to the selected command.
pub fn run() -> Result<ExitCode> {
    let args: Vec<String> = env::args().collect();

    // The config may name a language; the --lang flag still wins. Errors are
    // reported once clap has settled which config was actually given.
    let early_config = EngineConfig::load(pre_parse_config(&args).as_deref()).unwrap_or_default();

    let requested = pre_parse_language(&args).or_else(|| early_config.language.clone());
    let language = crate::select_locale(requested.as_deref());
    rust_i18n::set_locale(language);

    let matches = build_cli(language).get_matches_from(args);
    logger::init_logger(matches.get_flag("verbose"));

    let config_path = matches.get_one::<PathBuf>("config");
    debug!(config = ?config_path, "loading configuration");
    let config = EngineConfig::load(config_path.map(PathBuf::as_path))?;

    dispatch(&matches, config, language)
}

fn dispatch(matches: &ArgMatches, config: EngineConfig, locale: &str) -> Result<ExitCode> {
    match matches.subcommand() {
        Some(("resolve", sub)) => commands::resolve::execute(sub, config, locale),
        Some(("candidates", sub)) => commands::candidates::execute(sub, &config, locale),
        Some(("init", sub)) => {
            let dir = sub
                .get_one::<PathBuf>("dir")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("."));
            commands::init::execute(&dir, sub.get_flag("force"), locale)
        }
        // `subcommand_required` makes clap print help before we get here.
        _ => Ok(ExitCode::SUCCESS),
    }
}
