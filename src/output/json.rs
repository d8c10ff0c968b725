//! JSON output formatting and file writing

use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::Result;

/// Serialize a value as pretty-printed JSON with four-space indentation.
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;

    // serde guarantees valid UTF-8 output
    Ok(String::from_utf8(buf).expect("serialized JSON is valid UTF-8"))
}

/// Write a value as pretty-printed JSON to a file, overwriting any existing
/// content. A trailing newline is appended.
pub fn write_json_file<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut contents = format_json(value)?;
    contents.push('\n');
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_format_json_four_space_indent() {
        let value = json!({ "level": 11.38, "login": "jdoe" });
        let output = format_json(&value).unwrap();

        assert!(output.starts_with("{\n    \""));
        assert!(output.ends_with('}'));
    }

    #[test]
    fn test_format_json_array() {
        let value = json!([{ "a": 1 }, { "a": 2 }]);
        let output = format_json(&value).unwrap();

        assert!(output.starts_with("[\n"));
        assert!(output.contains("    {\n        \"a\": 1"));
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        let value = json!([
            { "login": "a", "level": 3.14 },
            { "login": "b", "level": 0.0 }
        ]);
        write_json_file(&path, &value).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.ends_with('\n'));

        let reread: Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(reread, value);
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        std::fs::write(&path, "old contents that are much longer than the new ones").unwrap();
        write_json_file(&path, &json!({})).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}\n");
    }

    #[test]
    fn test_write_to_unopenable_path_fails() {
        let path = Path::new("/nonexistent-dir/out.json");
        assert!(write_json_file(path, &json!({})).is_err());
    }
}
