//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::config::Credentials;
use crate::error::Result;

/// Run the init command
///
/// Prompts for the Intra application UID and SECRET and writes them to the
/// credentials file. The secret is read with hidden input and the file is
/// created with mode 600.
pub fn run(env_file: Option<&str>) -> Result<()> {
    println!("{}", "Welcome to intrarank!".bold().green());
    println!("Let's set up your Intra API credentials.\n");

    let uid: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter your application UID")
        .interact_text()?;

    let secret: String = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter your application SECRET")
        .interact()?;

    let credentials = Credentials { uid, secret };
    let path = Credentials::resolve_path(env_file);
    credentials.save(&path)?;

    println!(
        "\n{} Credentials written to {}",
        "✓".green(),
        path.display().to_string().bold()
    );
    println!("Run {} to verify.", "intrarank status".cyan());

    Ok(())
}
