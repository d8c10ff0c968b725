//! Rank command implementation
//!
//! Fetches the full `cursus_users` collection for a cursus/campus pair,
//! projects each record, sorts by level descending, and writes the result
//! as a pretty-printed JSON file.

use std::path::Path;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::{CommandContext, OutputFormat};
use crate::client::models::{self, RankedUser};
use crate::client::{CursusUsersQuery, fetch_all_pages};
use crate::error::Result;
use crate::output::{format_json, format_table, write_json_file};

/// Run the rank command
pub async fn run(
    ctx: &CommandContext,
    query: CursusUsersQuery,
    output: &str,
    format: OutputFormat,
) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("static template is valid"),
    );
    spinner.set_message("Fetching cursus_users...");

    let raw_records = fetch_all_pages(&ctx.client, &query, |page, total| {
        spinner.set_message(format!("Fetched page {page} ({total} records)"));
        spinner.tick();
    })
    .await?;

    spinner.finish_and_clear();

    let mut users: Vec<RankedUser> = raw_records.iter().map(RankedUser::project).collect();
    models::sort_by_level_desc(&mut users);

    write_json_file(Path::new(output), &users)?;

    match format {
        OutputFormat::Pretty => {
            println!(
                "{} {} cursus_users sorted by level (desc) written to {}",
                "✓".green(),
                users.len(),
                output.bold()
            );
        }
        OutputFormat::Table => {
            println!("{}", format_table(&users));
        }
        OutputFormat::Json => {
            println!("{}", format_json(&users)?);
        }
    }

    Ok(())
}
