//! Status command implementation

use colored::Colorize;

use crate::config::Credentials;
use crate::error::Result;

/// Run the status command to display credentials status.
///
/// Read-only: reports the credentials file location and whether both keys
/// are present, without touching the network.
pub fn run(env_file: Option<&str>) -> Result<()> {
    println!("{}\n", "intrarank Configuration Status".bold());

    let path = Credentials::resolve_path(env_file);
    println!("Credentials file: {}", path.display().to_string().cyan());

    match Credentials::load(&path) {
        Ok(credentials) => {
            println!("{} UID configured ({})", "✓".green(), credentials.masked_uid());
            println!("{} SECRET configured", "✓".green());
        }
        Err(err) => {
            println!("{} {}", "✗".red(), err);
            println!("  → Run 'intrarank init' to configure");
        }
    }

    println!();

    Ok(())
}
