use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use serde::de::DeserializeOwned;
use toml::{map::Map, Value};

/// Root of the cargo workspace, falling back to the current directory when
/// cargo is not around (e.g. a deployed binary).
pub fn workspace_dir() -> PathBuf {
    let located = std::process::Command::new(env!("CARGO"))
        .arg("locate-project")
        .arg("--workspace")
        .arg("--message-format=plain")
        .output()
        .ok()
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .and_then(|stdout| {
            Path::new(stdout.trim()).parent().map(Path::to_path_buf)
        })
        .filter(|dir| !dir.as_os_str().is_empty());

    match located {
        Some(dir) => dir,
        None => std::env::current_dir().unwrap_or_default(),
    }
}

pub fn load_config<T: DeserializeOwned>(config_name: &str) -> anyhow::Result<T> {
    read_config(&workspace_dir().join(config_name))
}

pub fn read_config<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let config = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    toml::from_str::<T>(&config)
        .with_context(|| format!("failed to parse {}", path.display()))
}

pub fn load_env(secrets_name: &str) -> anyhow::Result<Map<String, Value>> {
    let workspace_dir = workspace_dir();
    let secrets = std::fs::read_to_string(workspace_dir.join(secrets_name))
        .with_context(|| format!("failed to read {}", secrets_name))?;

    toml::from_str::<Map<String, Value>>(&secrets)
        .with_context(|| format!("failed to parse {}", secrets_name))
}

/// Looks `key` up in the process environment first, then in the given
/// secrets table.
pub fn secret(
    key: &str,
    secrets: Option<&Map<String, Value>>,
) -> anyhow::Result<String> {
    if let Ok(value) = std::env::var(key) {
        if !value.is_empty() {
            return Ok(value);
        }
    }

    secrets
        .and_then(|secrets| secrets.get(key))
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| anyhow!("{} was not found", key))
}
