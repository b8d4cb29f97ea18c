mod config;

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

use crate::config::MedleyConfig;
use medley_core::{MediaType, MedleyError, MedleyResult};

pub use config::{ApiConfig, DefaultConfig, MedleyConfig as MedleyConfigData, OutputConfig};

pub fn config_path() -> MedleyResult<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| MedleyError::Config("home directory not found".to_string()))?;
    Ok(home.join(".medley").join("config.toml"))
}

pub fn load_config() -> MedleyResult<MedleyConfig> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(MedleyConfig::default());
    }
    let content = fs::read_to_string(&path)
        .map_err(|err| MedleyError::Config(format!("failed to read config: {err}")))?;
    let config = toml::from_str(&content)
        .map_err(|err| MedleyError::Config(format!("failed to parse config: {err}")))?;
    Ok(config)
}

pub fn save_config(config: &MedleyConfig) -> MedleyResult<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| MedleyError::Config(format!("failed to create config dir: {err}")))?;
    }
    let content = toml::to_string_pretty(config)
        .map_err(|err| MedleyError::Config(format!("failed to serialize config: {err}")))?;
    fs::write(&path, content)
        .map_err(|err| MedleyError::Config(format!("failed to write config: {err}")))?;
    Ok(())
}

pub fn config_exists() -> MedleyResult<bool> {
    let path = config_path()?;
    Ok(path.exists())
}

pub fn resolve_base_url(config: &MedleyConfig) -> Option<String> {
    if let Ok(value) = env::var("MEDLEY_API_URL") {
        if !value.trim().is_empty() {
            return Some(value);
        }
    }
    config.api.base_url.clone()
}

pub fn resolve_api_token(config: &MedleyConfig) -> Option<String> {
    if let Ok(value) = env::var("MEDLEY_API_TOKEN") {
        if !value.trim().is_empty() {
            return Some(value);
        }
    }
    config.api.token.clone()
}

pub fn resolve_default_media_type(config: &MedleyConfig) -> Option<MediaType> {
    if let Ok(value) = env::var("MEDLEY_DEFAULT_TYPE") {
        if let Some(media_type) = MediaType::from_input(&value) {
            return Some(media_type);
        }
    }
    config
        .default
        .media_type
        .as_deref()
        .and_then(MediaType::from_input)
}

pub fn resolve_simple_output(config: &MedleyConfig) -> Option<bool> {
    if let Ok(value) = env::var("MEDLEY_OUTPUT_SIMPLE") {
        let normalized = value.to_lowercase();
        return Some(normalized == "1" || normalized == "true" || normalized == "yes");
    }
    config.output.simple
}

pub fn set_config_value(key_path: &str, value: &str) -> MedleyResult<()> {
    let path = config_path()?;
    let content = if path.exists() {
        fs::read_to_string(&path)
            .map_err(|err| MedleyError::Config(format!("failed to read config: {err}")))?
    } else {
        String::new()
    };

    let mut doc = content
        .parse::<toml_edit::DocumentMut>()
        .unwrap_or_default();

    let parts: Vec<&str> = key_path.split('.').collect();
    if parts.len() < 2 {
        return Err(MedleyError::Config(
            "key path must have at least 2 parts (e.g., 'api.base_url')".to_string(),
        ));
    }

    let table = doc.as_table_mut();
    let mut current = table;
    for part in &parts[..parts.len() - 1] {
        current = current
            .entry(part)
            .or_insert(toml_edit::Item::Table(Default::default()))
            .as_table_mut()
            .ok_or_else(|| {
                MedleyError::Config(format!("cannot set nested value in '{}'", key_path))
            })?;
    }

    let last_part = parts.last().unwrap();
    current[last_part] = toml_edit::value(value);

    let content = doc.to_string();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| MedleyError::Config(format!("failed to create config dir: {err}")))?;
    }
    fs::write(&path, content)
        .map_err(|err| MedleyError::Config(format!("failed to write config: {err}")))?;

    Ok(())
}

pub fn open_in_editor() -> MedleyResult<()> {
    let path = config_path()?;
    if !path.exists() {
        save_config(&MedleyConfig::default())?;
    }

    let editor = env::var("EDITOR").unwrap_or_else(|_| {
        if cfg!(target_os = "macos") {
            "vim".to_string()
        } else if cfg!(target_os = "windows") {
            "notepad".to_string()
        } else {
            "nano".to_string()
        }
    });

    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .map_err(|err| MedleyError::Config(format!("failed to open editor '{}': {}", editor, err)))?;

    if !status.success() {
        return Err(MedleyError::Config(format!(
            "editor exited with status: {}",
            status
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{MedleyConfigData, resolve_default_media_type};
    use medley_core::MediaType;

    #[test]
    fn config_defaults_are_empty() {
        let config = MedleyConfigData::default();
        assert!(config.api.base_url.is_none());
        assert!(config.api.token.is_none());
        assert!(config.default.media_type.is_none());
        assert!(config.output.simple.is_none());
    }

    #[test]
    fn default_media_type_comes_from_config() {
        let mut config = MedleyConfigData::default();
        config.default.media_type = Some("soundcloud".to_string());
        assert_eq!(
            resolve_default_media_type(&config),
            Some(MediaType::Soundcloud)
        );
    }

    #[test]
    fn unknown_default_media_type_is_ignored() {
        let mut config = MedleyConfigData::default();
        config.default.media_type = Some("vimeo".to_string());
        assert_eq!(resolve_default_media_type(&config), None);
    }
}
