use anyhow::Result;
use clap::ArgMatches;
use std::process::ExitCode;

use crate::cli::commands::context_from_matches;
use crate::core::candidates::generate_candidates_under;
use crate::core::config::EngineConfig;
use crate::reporting::print_candidates;

/// Executes the `candidates` command: prints the lookup chain for a context
/// without touching any catalog.
pub fn execute(matches: &ArgMatches, config: &EngineConfig, locale: &str) -> Result<ExitCode> {
    let context = context_from_matches(matches)?;
    let candidates = generate_candidates_under(&config.root, &context, context.status);
    print_candidates(&candidates, locale);
    Ok(ExitCode::SUCCESS)
}
