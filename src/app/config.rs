use super::chord::DEFAULT_CHORD_WINDOW;
use super::dispatcher::DEFAULT_SCROLL_DURATION;
use super::highlight::DEFAULT_HIGHLIGHT_CLASS;
use super::timeago::DEFAULT_TIMEAGO_CLASS;
use crate::domain::page::Landmark;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolSourceKind {
    #[default]
    Local,
    Remote,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolsConfig {
    pub source: SymbolSourceKind,
    pub endpoint: String,
}

impl Default for SymbolsConfig {
    fn default() -> Self {
        Self {
            source: SymbolSourceKind::Local,
            endpoint: "http://localhost:8080/-/typeahead".to_string(),
        }
    }
}

/// Naming scheme of the page's landmark elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LandmarkProfile {
    #[default]
    Default,
    Legacy,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LandmarkConfig {
    pub profile: LandmarkProfile,
    /// Per-landmark id overrides, keyed like the `LandmarkIds` fields.
    pub ids: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandmarkIds {
    pub index: String,
    pub examples: String,
    pub jump: String,
    pub jump_text: String,
    pub shortcuts: String,
    pub search: String,
    pub content: String,
    pub example_fragment_prefix: String,
    pub example_panel_prefix: String,
}

impl LandmarkIds {
    pub fn for_profile(profile: LandmarkProfile) -> Self {
        match profile {
            LandmarkProfile::Default => Self {
                index: "pkg-index".to_string(),
                examples: "pkg-examples".to_string(),
                jump: "x-jump".to_string(),
                jump_text: "x-jump-text".to_string(),
                shortcuts: "x-shortcuts".to_string(),
                search: "x-search-query".to_string(),
                content: "x-file".to_string(),
                example_fragment_prefix: "example-".to_string(),
                example_panel_prefix: "ex-".to_string(),
            },
            LandmarkProfile::Legacy => Self {
                index: "_index".to_string(),
                examples: "_examples".to_string(),
                jump: "_jump".to_string(),
                jump_text: "_jump_text".to_string(),
                shortcuts: "_shortcuts".to_string(),
                search: "_search".to_string(),
                content: "_file".to_string(),
                example_fragment_prefix: "_example_".to_string(),
                example_panel_prefix: "_ex_".to_string(),
            },
        }
    }

    pub fn id(&self, landmark: Landmark) -> &str {
        match landmark {
            Landmark::Index => &self.index,
            Landmark::Examples => &self.examples,
            Landmark::JumpDialog => &self.jump,
            Landmark::JumpText => &self.jump_text,
            Landmark::ShortcutsDialog => &self.shortcuts,
            Landmark::SearchInput => &self.search,
            Landmark::ContentFile => &self.content,
        }
    }

    fn apply_override(&mut self, key: &str, value: &str) -> bool {
        let slot = match key {
            "index" => &mut self.index,
            "examples" => &mut self.examples,
            "jump" => &mut self.jump,
            "jump_text" => &mut self.jump_text,
            "shortcuts" => &mut self.shortcuts,
            "search" => &mut self.search,
            "content" => &mut self.content,
            "example_fragment_prefix" => &mut self.example_fragment_prefix,
            "example_panel_prefix" => &mut self.example_panel_prefix,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}

impl Default for LandmarkIds {
    fn default() -> Self {
        Self::for_profile(LandmarkProfile::Default)
    }
}

impl LandmarkConfig {
    pub fn resolve(&self) -> LandmarkIds {
        let mut ids = LandmarkIds::for_profile(self.profile);
        for (key, value) in &self.ids {
            if !ids.apply_override(key, value) {
                tracing::warn!(key, "unknown landmark override ignored");
            }
        }
        ids
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub chord_window_ms: u64,
    pub scroll_duration_ms: u64,
    pub highlight_class: String,
    pub timeago_class: String,
    pub symbols: SymbolsConfig,
    pub landmarks: LandmarkConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chord_window_ms: DEFAULT_CHORD_WINDOW.as_millis() as u64,
            scroll_duration_ms: DEFAULT_SCROLL_DURATION.as_millis() as u64,
            highlight_class: DEFAULT_HIGHLIGHT_CLASS.to_string(),
            timeago_class: DEFAULT_TIMEAGO_CLASS.to_string(),
            symbols: SymbolsConfig::default(),
            landmarks: LandmarkConfig::default(),
        }
    }
}

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("docnav");
        path
    })
}

pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

impl Config {
    pub fn chord_window(&self) -> Duration {
        Duration::from_millis(self.chord_window_ms)
    }

    pub fn scroll_duration(&self) -> Duration {
        Duration::from_millis(self.scroll_duration_ms)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    /// An explicit path must load. The default location is optional and a
    /// broken file there falls back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Ok(Self::load_from(&path).unwrap_or_else(|e| {
                tracing::warn!("{e:#}; using default configuration");
                Self::default()
            })),
            _ => Ok(Self::default()),
        }
    }
}
