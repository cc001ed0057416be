//! Page configuration parsed from `data-*` attributes on `<body>`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::state::theme::Theme;
use crate::util::shortcut::{ChordError, KeyChord};

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_DARK_CLASS: &str = "dark-mode";
pub const DEFAULT_TOGGLE_ID: &str = "dark-mode-toggle";
pub const DEFAULT_BACK_TO_TOP_ID: &str = "back-to-top";
pub const DEFAULT_BACK_TO_TOP_OFFSET_PX: f64 = 300.0;
pub const DEFAULT_REVEAL_SELECTOR: &str = ".fade-in";
pub const DEFAULT_REVEAL_STEP_MS: u32 = 100;
pub const DEFAULT_REVEAL_MAX_DELAY_MS: u32 = 800;
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
pub const DEFAULT_TAGLINE_ID: &str = "tagline";
pub const DEFAULT_TYPING_DELAY_MS: u32 = 100;
pub const DEFAULT_COMMIT_ELEMENT_ID: &str = "last-updated";
pub const DEFAULT_GITHUB_API_BASE: &str = "https://api.github.com";

/// Class added to revealed elements and to the shown back-to-top button.
pub const VISIBLE_CLASS: &str = "visible";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {attr}: {value:?} is not \"light\" or \"dark\"")]
    InvalidTheme { attr: &'static str, value: String },
    #[error("invalid {attr}: {value:?} is not a non-negative number")]
    InvalidNumber { attr: &'static str, value: String },
    #[error("invalid {attr}: {source}")]
    InvalidShortcut { attr: &'static str, source: ChordError },
    #[error("invalid {attr}: {value:?} is not owner/name")]
    InvalidRepo { attr: &'static str, value: String },
    #[error("invalid {attr}: {value:?} is not a log level")]
    InvalidLogLevel { attr: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSettings {
    pub storage_key: String,
    /// Used when nothing valid is persisted.
    pub default_theme: Theme,
    /// Class on `<body>` meaning dark is active.
    pub dark_class: String,
    pub toggle_id: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            default_theme: Theme::Light,
            dark_class: DEFAULT_DARK_CLASS.to_owned(),
            toggle_id: DEFAULT_TOGGLE_ID.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackToTopSettings {
    pub element_id: String,
    pub threshold_px: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealSettings {
    pub selector: String,
    pub step_ms: u32,
    pub max_delay_ms: u32,
    pub threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingSettings {
    pub element_id: String,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSettings {
    pub element_id: String,
    /// `owner/name`; the feature is off when `None`.
    pub repo: Option<String>,
    pub api_base: String,
}

/// Every tunable of the page enhancements.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub theme: ThemeSettings,
    pub back_to_top: BackToTopSettings,
    pub reveal: RevealSettings,
    pub typing: TypingSettings,
    pub shortcut: KeyChord,
    pub commits: CommitSettings,
    pub log_level: log::Level,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme: ThemeSettings::default(),
            back_to_top: BackToTopSettings {
                element_id: DEFAULT_BACK_TO_TOP_ID.to_owned(),
                threshold_px: DEFAULT_BACK_TO_TOP_OFFSET_PX,
            },
            reveal: RevealSettings {
                selector: DEFAULT_REVEAL_SELECTOR.to_owned(),
                step_ms: DEFAULT_REVEAL_STEP_MS,
                max_delay_ms: DEFAULT_REVEAL_MAX_DELAY_MS,
                threshold: DEFAULT_REVEAL_THRESHOLD,
            },
            typing: TypingSettings { element_id: DEFAULT_TAGLINE_ID.to_owned(), delay_ms: DEFAULT_TYPING_DELAY_MS },
            shortcut: KeyChord::default(),
            commits: CommitSettings {
                element_id: DEFAULT_COMMIT_ELEMENT_ID.to_owned(),
                repo: None,
                api_base: DEFAULT_GITHUB_API_BASE.to_owned(),
            },
            log_level: log::Level::Info,
        }
    }
}

impl SiteConfig {
    /// Overlay attribute values onto the defaults.
    ///
    /// `lookup` receives full attribute names (`data-default-theme`) and
    /// returns the raw value when present. Blank values count as absent.
    /// An attribute that fails to parse keeps its default and is reported in
    /// the returned list; the remaining attributes still apply.
    ///
    /// Optional:
    /// - `data-default-theme`: `light` (default) or `dark`
    /// - `data-theme-key`: storage key, default `theme`
    /// - `data-back-to-top-offset`: pixels, default 300
    /// - `data-reveal-step`: milliseconds, default 100
    /// - `data-typing-delay`: milliseconds, default 100
    /// - `data-theme-shortcut`: chord, default `alt+shift+d`
    /// - `data-commit-repo`: `owner/name`, unset by default
    /// - `data-log-level`: `error`..`trace`, default `info`
    #[must_use]
    pub fn from_attributes(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<ConfigError>) {
        let get = |attr: &str| lookup(attr).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let mut config = Self::default();
        let mut rejected = Vec::new();

        if let Some(raw) = get("data-default-theme") {
            let parsed =
                raw.parse::<Theme>().map_err(|_| ConfigError::InvalidTheme { attr: "data-default-theme", value: raw });
            apply(&mut config.theme.default_theme, parsed, &mut rejected);
        }
        if let Some(raw) = get("data-theme-key") {
            config.theme.storage_key = raw;
        }
        if let Some(raw) = get("data-back-to-top-offset") {
            apply(
                &mut config.back_to_top.threshold_px,
                parse_offset("data-back-to-top-offset", &raw),
                &mut rejected,
            );
        }
        if let Some(raw) = get("data-reveal-step") {
            apply(&mut config.reveal.step_ms, parse_millis("data-reveal-step", &raw), &mut rejected);
        }
        if let Some(raw) = get("data-typing-delay") {
            apply(&mut config.typing.delay_ms, parse_millis("data-typing-delay", &raw), &mut rejected);
        }
        if let Some(raw) = get("data-theme-shortcut") {
            let parsed = raw
                .parse::<KeyChord>()
                .map_err(|source| ConfigError::InvalidShortcut { attr: "data-theme-shortcut", source });
            apply(&mut config.shortcut, parsed, &mut rejected);
        }
        if let Some(raw) = get("data-commit-repo") {
            apply(&mut config.commits.repo, parse_repo("data-commit-repo", &raw).map(Some), &mut rejected);
        }
        if let Some(raw) = get("data-log-level") {
            let parsed =
                raw.parse::<log::Level>().map_err(|_| ConfigError::InvalidLogLevel { attr: "data-log-level", value: raw });
            apply(&mut config.log_level, parsed, &mut rejected);
        }

        (config, rejected)
    }
}

/// Store a parsed value, or keep the default and record why.
fn apply<T>(slot: &mut T, parsed: Result<T, ConfigError>, rejected: &mut Vec<ConfigError>) {
    match parsed {
        Ok(value) => *slot = value,
        Err(e) => rejected.push(e),
    }
}

fn parse_millis(attr: &'static str, raw: &str) -> Result<u32, ConfigError> {
    raw.parse::<u32>().map_err(|_| ConfigError::InvalidNumber { attr, value: raw.to_owned() })
}

fn parse_offset(attr: &'static str, raw: &str) -> Result<f64, ConfigError> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(ConfigError::InvalidNumber { attr, value: raw.to_owned() }),
    }
}

fn parse_repo(attr: &'static str, raw: &str) -> Result<String, ConfigError> {
    let valid_part = |part: &str| {
        !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    };
    match raw.split_once('/') {
        Some((owner, name)) if valid_part(owner) && valid_part(name) => Ok(raw.to_owned()),
        _ => Err(ConfigError::InvalidRepo { attr, value: raw.to_owned() }),
    }
}
