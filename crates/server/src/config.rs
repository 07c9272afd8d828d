use std::{collections::HashMap, fs, net::SocketAddr, path::Path};

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_BIND: &str = "127.0.0.1:8050";
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_MAX_INPUT_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub server_bind: String,
    pub log_filter: String,
    pub max_input_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: DEFAULT_BIND.into(),
            log_filter: DEFAULT_LOG_FILTER.into(),
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

/// Settings plus the problems found while reading them. The loader runs
/// before logging is configured, so warnings are reported by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub warnings: Vec<String>,
}

/// Defaults, then the optional settings file, then the environment.
pub fn load_settings(path: &Path) -> LoadedSettings {
    let file = fs::read_to_string(path).ok();
    settings_from_sources(file.as_deref(), |key| std::env::var(key).ok())
}

pub fn settings_from_sources(
    file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> LoadedSettings {
    let mut settings = Settings::default();
    let mut warnings = Vec::new();

    if let Some(raw) = file {
        match toml::from_str::<HashMap<String, String>>(raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("bind_addr") {
                    settings.server_bind = v.clone();
                }
                if let Some(v) = file_cfg.get("log_filter") {
                    settings.log_filter = v.clone();
                }
                if let Some(v) = file_cfg.get("max_input_bytes") {
                    apply_max_input_bytes(&mut settings, &mut warnings, v);
                }
            }
            Err(error) => warnings.push(format!("ignoring unreadable settings file: {error}")),
        }
    }

    if let Some(v) = env("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = env("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = env("RUST_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    if let Some(v) = env("APP__MAX_INPUT_BYTES") {
        apply_max_input_bytes(&mut settings, &mut warnings, &v);
    }

    LoadedSettings { settings, warnings }
}

fn apply_max_input_bytes(settings: &mut Settings, warnings: &mut Vec<String>, raw: &str) {
    match raw.trim().parse::<usize>() {
        Ok(parsed) if parsed > 0 => settings.max_input_bytes = parsed,
        _ => warnings.push(format!("ignoring invalid max_input_bytes '{raw}'")),
    }
}

pub fn parse_bind_addr(raw: &str) -> anyhow::Result<SocketAddr> {
    raw.trim()
        .parse()
        .with_context(|| format!("invalid bind address '{raw}'"))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
