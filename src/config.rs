use std::path::{Path, PathBuf};
use std::str::FromStr;

use ratatui::style::Color;
use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;
use crate::game::Player;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub log: LogConfig,
}

/// Presentation settings shared by the terminal and plain adapters.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Token and highlight color for Player 1 (name or `#RRGGBB`)
    pub player_one_color: String,
    /// Token and highlight color for Player 2
    pub player_two_color: String,
    /// Ring the terminal bell when a move is rejected
    pub bell_on_invalid: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            player_one_color: "#E53935".into(),
            player_two_color: "#1976D2".into(),
            bell_on_invalid: true,
        }
    }
}

impl UiConfig {
    /// Resolved color for a player. Falls back to red/blue if the configured
    /// value does not parse; `AppConfig::validate` rejects such values up front.
    pub fn player_color(&self, player: Player) -> Color {
        let (raw, fallback) = match player {
            Player::One => (&self.player_one_color, Color::Red),
            Player::Two => (&self.player_two_color, Color::Blue),
        };
        Color::from_str(raw).unwrap_or(fallback)
    }
}

/// Log sink settings. The terminal belongs to the UI, so logs go to a file.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: "info".into(),
            file: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist. The flag is `true` when the defaults were used, so the
    /// caller can warn once logging is up.
    pub fn load_or_default(path: &Path) -> Result<(Self, bool), ConfigError> {
        if path.exists() {
            Ok((Self::load(path)?, false))
        } else {
            Ok((Self::default(), true))
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if Color::from_str(&self.ui.player_one_color).is_err() {
            return Err(ConfigError::Validation(format!(
                "ui.player_one_color '{}' is not a terminal color",
                self.ui.player_one_color
            )));
        }
        if Color::from_str(&self.ui.player_two_color).is_err() {
            return Err(ConfigError::Validation(format!(
                "ui.player_two_color '{}' is not a terminal color",
                self.ui.player_two_color
            )));
        }
        if self.ui.player_one_color.eq_ignore_ascii_case(&self.ui.player_two_color) {
            return Err(ConfigError::Validation(
                "ui.player_one_color and ui.player_two_color must differ".into(),
            ));
        }
        if let Err(e) = EnvFilter::try_new(&self.log.level) {
            return Err(ConfigError::Validation(format!(
                "log.level '{}' is not a valid filter: {e}",
                self.log.level
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).unwrap_or_default()
    }
}
