//! # Resolve Command Module / 解析命令模块
//!
//! This module implements the `resolve` command, which loads the configured
//! catalogs and renders the flash message for a given context.
//!
//! 此模块实现了 `resolve` 命令，加载配置的目录并为给定上下文渲染 flash 消息。

use anyhow::{Context, Result};
use clap::ArgMatches;
use std::{path::PathBuf, process::ExitCode, sync::Arc};

use crate::{
    cli::commands::context_from_matches,
    core::{
        config::EngineConfig,
        engine::FlashEngine,
        models::{KeyPath, ResolveOptions},
    },
    infra::loader::load_catalog_dirs,
    reporting::{print_error, print_result},
};

/// Executes the resolve command with the parsed arguments.
///
/// # Arguments
/// * `matches` - The `resolve` subcommand matches
/// * `config` - The loaded resolver configuration; `--catalog` replaces its directories
/// * `locale` - Language of the command's own output
///
/// # Returns
/// `ExitCode::SUCCESS` when a message was rendered, `ExitCode::FAILURE` when
/// resolution failed (the error is printed to stderr)
pub fn execute(matches: &ArgMatches, mut config: EngineConfig, locale: &str) -> Result<ExitCode> {
    if let Some(dirs) = matches.get_many::<PathBuf>("catalog") {
        config.catalog_dirs = dirs.cloned().collect();
    }

    let context = context_from_matches(matches)?;
    let options = options_from_matches(matches);

    let catalog = load_catalog_dirs(&config.catalog_dirs, &config)
        .context("Failed to load message catalogs")?;
    let engine = FlashEngine::new(Arc::new(catalog), config);

    match engine.resolve(&context, &options) {
        Ok(result) => {
            if matches.get_flag("json") {
                let json = serde_json::to_string_pretty(&result)
                    .context("Failed to serialize resolution result")?;
                println!("{}", json);
            } else {
                print_result(&result, matches.get_flag("explain"), locale);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            print_error(&e, locale);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn options_from_matches(matches: &ArgMatches) -> ResolveOptions {
    let mut options = ResolveOptions::new();

    if let Some(vars) = matches.get_many::<(String, String)>("var") {
        for (name, value) in vars {
            options.substitutions.insert(name.clone(), value);
        }
    }
    if let Some(default) = matches.get_one::<String>("default") {
        options.default = Some(default.clone());
    }
    if let Some(key) = matches.get_one::<String>("key") {
        options.key = Some(KeyPath::parse(key));
    }
    if let Some(fallbacks) = matches.get_many::<String>("fallback") {
        options.fallback_keys = Some(fallbacks.map(|k| KeyPath::parse(k)).collect());
    }

    options
}
