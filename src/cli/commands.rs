//! # Commands Module / 命令模块
//!
//! One module per subcommand of the `flash-resolver` binary.
//! `flash-resolver` 二进制的每个子命令对应一个模块。

pub mod candidates;
pub mod init;
pub mod resolve;

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::core::models::{ResolutionContext, Status};

/// Builds the resolution context from the `--component`, `--action`,
/// `--status` and `--resource` arguments.
pub(crate) fn context_from_matches(matches: &ArgMatches) -> Result<ResolutionContext> {
    let component = matches
        .get_one::<String>("component")
        .map(String::as_str)
        .unwrap_or_default();
    let action = matches
        .get_one::<String>("action")
        .context("missing --action")?;
    let status: Status = matches
        .get_one::<String>("status")
        .map(String::as_str)
        .unwrap_or("success")
        .parse()?;

    let mut context = ResolutionContext::from_component(component, action.as_str(), status)?;
    if let Some(resource) = matches.get_one::<String>("resource") {
        context = context.with_resource(resource.as_str());
    }
    Ok(context)
}
