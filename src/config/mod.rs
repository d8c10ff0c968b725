//! Credentials management for intrarank
//!
//! The Intra API client credentials live in a flat `KEY=VALUE` file
//! (`.env` by default). Only two keys are recognized: `UID` and `SECRET`.

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Default credentials file, resolved against the working directory
pub const DEFAULT_ENV_FILE: &str = ".env";

/// API client credentials loaded from the env file
#[derive(Debug, Clone)]
pub struct Credentials {
    /// OAuth client identifier (`UID` key)
    pub uid: String,

    /// OAuth client secret (`SECRET` key)
    pub secret: String,
}

impl Credentials {
    /// Resolve the credentials file path from an optional override.
    pub fn resolve_path(path: Option<&str>) -> PathBuf {
        PathBuf::from(path.unwrap_or(DEFAULT_ENV_FILE))
    }

    /// Load credentials from the given file.
    ///
    /// Lines are scanned as `KEY=VALUE`; blank lines and lines without `=`
    /// are skipped, and both key and value are trimmed of surrounding
    /// whitespace. Unrecognized keys are ignored. Fails when the file cannot
    /// be read or when either `UID` or `SECRET` is missing or empty.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::NotFound(path.display().to_string()))?;

        Self::parse(&contents)
    }

    /// Parse credentials from file contents.
    fn parse(contents: &str) -> Result<Self> {
        let mut uid = String::new();
        let mut secret = String::new();

        for line in contents.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };

            match key.trim() {
                "UID" => uid = value.trim().to_string(),
                "SECRET" => secret = value.trim().to_string(),
                _ => {}
            }
        }

        if uid.is_empty() {
            return Err(ConfigError::MissingKey("UID").into());
        }
        if secret.is_empty() {
            return Err(ConfigError::MissingKey("SECRET").into());
        }

        Ok(Self { uid, secret })
    }

    /// Save credentials to the given file, overwriting existing contents.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = format!("UID={}\nSECRET={}\n", self.uid, self.secret);

        std::fs::write(path, contents).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        // Set file permissions to 600 on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// UID preview for status display: first four characters, rest masked.
    pub fn masked_uid(&self) -> String {
        let visible: String = self.uid.chars().take(4).collect();
        format!("{visible}…")
    }
}
