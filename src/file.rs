//! Local files referenced from resource arguments (`~` expanded).

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

pub fn user_home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("could not determine the current user's home directory")
}

/// Replaces a leading `~` component with the user's home directory.
pub fn expand_home(path: &Path) -> Result<PathBuf> {
    match path.strip_prefix("~") {
        Ok(rest) => Ok(user_home_dir()?.join(rest)),
        Err(_) => Ok(path.to_path_buf()),
    }
}

pub fn load_file_content(path: &Path) -> Result<Vec<u8>> {
    let path = expand_home(path)?;
    std::fs::read(&path).with_context(|| format!("failed to read {}", path.display()))
}

/// Replaces the file at `path` with `data`.
///
/// The old file is removed first. `None` (or a value serializing to null)
/// leaves nothing behind, strings are written as-is, anything else as
/// tab-indented JSON.
pub fn write_to_file<T>(path: &Path, data: Option<&T>) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let path = expand_home(path)?;

    match std::fs::remove_file(&path) {
        Ok(()) => debug!(path = %path.display(), "removed previous file"),
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err).with_context(|| format!("failed to remove {}", path.display()));
        }
    }

    let Some(data) = data else {
        return Ok(());
    };
    let value = serde_json::to_value(data).context("failed to serialize file content")?;

    let out = match value {
        serde_json::Value::Null => return Ok(()),
        serde_json::Value::String(text) => text.into_bytes(),
        other => to_tab_indented_json(&other)?,
    };

    std::fs::write(&path, out).with_context(|| format!("failed to write {}", path.display()))
}

fn to_tab_indented_json(value: &serde_json::Value) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .context("failed to render JSON")?;
    Ok(buf)
}
