//! File operations shared by handlers and installers

use crate::error::InstallErrorKind;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

async fn ensure_parent(path: &Path) -> Result<(), InstallErrorKind> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| InstallErrorKind::io(parent, e))?;
    }
    Ok(())
}

/// Write (or overwrite) a file, creating parent directories
pub async fn write_file(path: &Path, contents: &str) -> Result<(), InstallErrorKind> {
    ensure_parent(path).await?;
    fs::write(path, contents)
        .await
        .map_err(|e| InstallErrorKind::io(path, e))
}

/// Append to a file, creating it and its parent directories if needed
pub async fn append_file(path: &Path, contents: &str) -> Result<(), InstallErrorKind> {
    ensure_parent(path).await?;
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .map_err(|e| InstallErrorKind::io(path, e))?;
    file.write_all(contents.as_bytes())
        .await
        .map_err(|e| InstallErrorKind::io(path, e))?;
    file.flush().await.map_err(|e| InstallErrorKind::io(path, e))
}

/// Write a file only if no regular file exists at `path`.
///
/// Returns `false` when an existing file was left untouched.
pub async fn write_if_absent(path: &Path, contents: &str) -> Result<bool, InstallErrorKind> {
    if is_file(path).await {
        return Ok(false);
    }
    write_file(path, contents).await?;
    Ok(true)
}

pub async fn is_file(path: &Path) -> bool {
    fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

/// Set `KEY="value"` in a dotenv file, keeping every other line as is
pub async fn upsert_env_var(path: &Path, key: &str, value: &str) -> Result<(), InstallErrorKind> {
    let existing = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
        Err(e) => return Err(InstallErrorKind::io(path, e)),
    };
    write_file(path, &set_env_line(&existing, key, value)).await
}

fn set_env_line(content: &str, key: &str, value: &str) -> String {
    let line = format!("{key}=\"{value}\"");
    let prefix = format!("{key}=");
    let mut replaced = false;

    let mut lines: Vec<String> = content
        .lines()
        .map(|l| {
            if !replaced && l.trim_start().starts_with(&prefix) {
                replaced = true;
                line.clone()
            } else {
                l.to_string()
            }
        })
        .collect();

    if !replaced {
        lines.push(line);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Read-modify-write a JSON object file, preserving unrelated keys and order
pub async fn update_json<F>(path: &Path, update: F) -> Result<(), InstallErrorKind>
where
    F: FnOnce(&mut Map<String, Value>),
{
    let raw = fs::read_to_string(path)
        .await
        .map_err(|e| InstallErrorKind::io(path, e))?;

    let manifest_error = |source| InstallErrorKind::Manifest {
        path: path.to_path_buf(),
        source,
    };

    let mut value: Value = serde_json::from_str(&raw).map_err(manifest_error)?;
    let Some(object) = value.as_object_mut() else {
        return Err(manifest_error(serde::de::Error::custom(
            "expected a JSON object at the top level",
        )));
    };
    update(object);

    let mut out = serde_json::to_string_pretty(&value).map_err(manifest_error)?;
    out.push('\n');
    write_file(path, &out).await
}

/// Set `object[section][key] = value`, creating or replacing a non-object section
pub fn set_nested(object: &mut Map<String, Value>, section: &str, key: &str, value: &str) {
    let entry = object
        .entry(section.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !entry.is_object() {
        *entry = Value::Object(Map::new());
    }
    if let Value::Object(map) = entry {
        map.insert(key.to_string(), Value::String(value.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_env_line_replaces_existing() {
        let content = "# comment\nDATABASE_URL=\"old\"\nOTHER=1\n";
        let out = set_env_line(content, "DATABASE_URL", "new");
        assert_eq!(out, "# comment\nDATABASE_URL=\"new\"\nOTHER=1\n");
    }

    #[test]
    fn test_set_env_line_appends_when_missing() {
        assert_eq!(set_env_line("", "A", "b"), "A=\"b\"\n");
        assert_eq!(set_env_line("X=1", "A", "b"), "X=1\nA=\"b\"\n");
    }

    #[tokio::test]
    async fn test_write_if_absent_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docker-compose.yml");
        std::fs::write(&path, "mine").unwrap();

        let written = write_if_absent(&path, "theirs").await.unwrap();
        assert!(!written);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "mine");
    }

    #[tokio::test]
    async fn test_append_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prisma").join("schema.prisma");
        append_file(&path, "a").await.unwrap();
        append_file(&path, "b").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "ab");
    }

    #[tokio::test]
    async fn test_update_json_preserves_unrelated_keys_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(
            &path,
            r#"{"name":"demo","scripts":{"dev":"next dev"},"private":true}"#,
        )
        .unwrap();

        update_json(&path, |pkg| set_nested(pkg, "scripts", "seed", "tsx prisma/seed.ts"))
            .await
            .unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["scripts"]["dev"], "next dev");
        assert_eq!(value["scripts"]["seed"], "tsx prisma/seed.ts");
        assert_eq!(value["private"], true);
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["name", "scripts", "private"]);
        assert!(raw.ends_with("}\n"));
    }

    #[tokio::test]
    async fn test_update_json_rejects_non_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(&path, "[1, 2]").unwrap();
        let err = update_json(&path, |_| {}).await.unwrap_err();
        assert!(matches!(err, InstallErrorKind::Manifest { .. }));
    }
}
