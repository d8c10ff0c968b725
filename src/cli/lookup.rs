//! Lookup command implementation
//!
//! Single-shot lookups of the cursus and campus reference collections,
//! filtered by name. Each raw response is written verbatim, pretty-printed,
//! to its own file.

use std::path::Path;

use colored::Colorize;

use crate::cli::CommandContext;
use crate::client::IntraApi;
use crate::error::Result;
use crate::output::write_json_file;

/// Run the lookup command
pub async fn run(ctx: &CommandContext, name: &str, cursus_out: &str, campus_out: &str) -> Result<()> {
    let cursus = ctx.client.find_cursus(name).await?;
    write_json_file(Path::new(cursus_out), &cursus)?;
    println!(
        "{} cursus matching {} written to {}",
        "✓".green(),
        name.bold(),
        cursus_out
    );

    let campus = ctx.client.find_campus(name).await?;
    write_json_file(Path::new(campus_out), &campus)?;
    println!(
        "{} campus matching {} written to {}",
        "✓".green(),
        name.bold(),
        campus_out
    );

    Ok(())
}
