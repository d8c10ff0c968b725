//! Projected record shape for ranked cursus users

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tabled::Tabled;

/// A cursus user projected down to the fields the export carries.
///
/// Every field is extracted defensively: the upstream schema is not
/// guaranteed stable, so an absent or mistyped source field falls back to the
/// typed default instead of failing the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tabled)]
pub struct RankedUser {
    /// Cursus start date (`begin_at`)
    #[tabled(rename = "BEGIN AT")]
    pub begin_at: String,

    /// Grade within the cursus (`grade`)
    #[tabled(rename = "GRADE")]
    pub grade: String,

    /// Current level (`level`)
    #[tabled(rename = "LEVEL")]
    pub level: f64,

    /// Cursus slug (`cursus.slug`)
    #[tabled(rename = "CURSUS")]
    pub cursus: String,

    /// Profile URL (`user.url`)
    #[tabled(rename = "URL")]
    pub url: String,

    /// Profile image URL (`user.image.link`, with sized fallbacks)
    #[tabled(rename = "IMAGE")]
    pub image_url: String,

    /// Login (`user.login`)
    #[tabled(rename = "LOGIN")]
    pub user_login: String,

    /// Email (`user.email`)
    #[tabled(rename = "EMAIL")]
    pub user_email: String,
}

fn str_at<'a>(value: &'a Value, path: &[&str]) -> Option<&'a str> {
    let mut current = value;
    for key in path {
        current = current.get(key)?;
    }
    current.as_str()
}

fn string_or_default(value: &Value, path: &[&str]) -> String {
    str_at(value, path).unwrap_or_default().to_string()
}

impl RankedUser {
    /// Project a raw `cursus_users` record into the fixed output shape.
    pub fn project(record: &Value) -> Self {
        // link first, then the sized variants
        let image_url = str_at(record, &["user", "image", "link"])
            .or_else(|| str_at(record, &["user", "image", "versions", "large"]))
            .or_else(|| str_at(record, &["user", "image", "versions", "small"]))
            .unwrap_or_default()
            .to_string();

        Self {
            begin_at: string_or_default(record, &["begin_at"]),
            grade: string_or_default(record, &["grade"]),
            level: record.get("level").and_then(Value::as_f64).unwrap_or(0.0),
            cursus: string_or_default(record, &["cursus", "slug"]),
            url: string_or_default(record, &["user", "url"]),
            image_url,
            user_login: string_or_default(record, &["user", "login"]),
            user_email: string_or_default(record, &["user", "email"]),
        }
    }
}

/// Sort projected records by level, strictly descending.
///
/// Stable, so equal levels keep arrival order.
pub fn sort_by_level_desc(users: &mut [RankedUser]) {
    users.sort_by(|a, b| b.level.total_cmp(&a.level));
}
