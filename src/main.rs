//! intrarank CLI - companion for the 42 Intra API

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod output;

use cli::{Cli, CommandContext, Commands};
use client::CursusUsersQuery;
use error::Result;

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => cli::init::run(cli.env_file.as_deref()),
        Commands::Status => cli::status::run(cli.env_file.as_deref()),
        Commands::Version => {
            println!("intrarank version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Rank {
            cursus_id,
            campus_id,
            page_size,
            output,
        } => {
            let ctx = CommandContext::new(cli.env_file.as_deref(), cli.api_host).await?;
            let query = CursusUsersQuery {
                cursus_id,
                campus_id,
                page_size,
            };
            cli::rank::run(&ctx, query, &output, cli.format).await
        }
        Commands::Lookup {
            name,
            cursus_out,
            campus_out,
        } => {
            let ctx = CommandContext::new(cli.env_file.as_deref(), cli.api_host).await?;
            cli::lookup::run(&ctx, &name, &cursus_out, &campus_out).await
        }
    }
}
