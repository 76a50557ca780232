use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub fn config_file() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("/"))
        .join(".config")
        .join("overview-nav")
        .join("config.toml")
}

/// How hovering a dock icon highlights the app's window previews.
/// The original preference is a three-way combo, not a switch.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy, Default, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HoverHighlightMode {
    Disabled,
    Titles,
    #[default]
    TitlesAndOpacity,
}

impl HoverHighlightMode {
    fn from_index(index: u64) -> Option<Self> {
        match index {
            0 => Some(HoverHighlightMode::Disabled),
            1 => Some(HoverHighlightMode::Titles),
            2 => Some(HoverHighlightMode::TitlesAndOpacity),
            _ => None,
        }
    }

    pub fn is_disabled(self) -> bool { matches!(self, HoverHighlightMode::Disabled) }
}

/// Policy flags consumed by the engine. The host's settings store owns
/// the values; it pushes updates via `OverviewEngine::update_settings`.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Shift + scroll / Shift + PageUp/PageDown reorders the active workspace.
    #[serde(default = "yes")]
    pub shift_reorders_workspace: bool,
    /// Tab/Space in the window picker moves keyboard focus to the dock.
    #[serde(default)]
    pub space_activates_dock: bool,
    /// Lift title captions up into the window previews.
    #[serde(default)]
    pub move_titles_into_windows: bool,
    /// The preview under the pointer is activated when the overview hides,
    /// without a click.
    #[serde(default)]
    pub hover_activates_window_on_leave: bool,
    #[serde(default)]
    pub hover_highlights_windows: HoverHighlightMode,
    /// Scrolling over a dock icon cycles through the workspaces holding the
    /// app's windows.
    #[serde(default = "yes")]
    pub scroll_switches_app_workspace: bool,
    /// Clicking an app with windows elsewhere reveals its workspace instead
    /// of activating it.
    #[serde(default = "yes")]
    pub show_windows_before_activation: bool,
    /// "Target window on current workspace" means the most-recently-used
    /// window specifically, not any window of the app.
    #[serde(default)]
    pub click_follows_recent_window: bool,
    #[serde(default = "yes")]
    pub shift_click_moves_app_to_current_workspace: bool,
    #[serde(default)]
    pub menu_force_quit: bool,
    #[serde(default)]
    pub menu_move_app_to_workspace: bool,
    #[serde(default)]
    pub menu_close_windows_on_workspace: bool,
}

fn yes() -> bool { true }

impl Default for Settings {
    fn default() -> Self {
        Self {
            shift_reorders_workspace: true,
            space_activates_dock: false,
            move_titles_into_windows: false,
            hover_activates_window_on_leave: false,
            hover_highlights_windows: HoverHighlightMode::default(),
            scroll_switches_app_workspace: true,
            show_windows_before_activation: true,
            click_follows_recent_window: false,
            shift_click_moves_app_to_current_workspace: true,
            menu_force_quit: false,
            menu_move_app_to_workspace: false,
            menu_close_windows_on_workspace: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("unknown settings key: {0}")]
    UnknownKey(String),
    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Settings> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let settings: Settings =
            toml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
        Ok(settings)
    }

    pub fn load_or_default() -> Settings {
        let path = config_file();
        match Settings::load(&path) {
            Ok(settings) => settings,
            Err(err) => {
                if path.exists() {
                    tracing::warn!("falling back to default settings: {err:#}");
                }
                Settings::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Generic setter for a single key, used when the host's settings store
    /// relays a changed value. Example: key = "shift_reorders_workspace",
    /// value = true
    pub fn set(&mut self, key: &str, value: Value) -> Result<(), SettingsError> {
        match key {
            "shift_reorders_workspace" => self.shift_reorders_workspace = as_bool(key, value)?,
            "space_activates_dock" => self.space_activates_dock = as_bool(key, value)?,
            "move_titles_into_windows" => self.move_titles_into_windows = as_bool(key, value)?,
            "hover_activates_window_on_leave" => {
                self.hover_activates_window_on_leave = as_bool(key, value)?
            }
            "hover_highlights_windows" => {
                self.hover_highlights_windows = as_highlight_mode(key, value)?
            }
            "scroll_switches_app_workspace" => {
                self.scroll_switches_app_workspace = as_bool(key, value)?
            }
            "show_windows_before_activation" => {
                self.show_windows_before_activation = as_bool(key, value)?
            }
            "click_follows_recent_window" => {
                self.click_follows_recent_window = as_bool(key, value)?
            }
            "shift_click_moves_app_to_current_workspace" => {
                self.shift_click_moves_app_to_current_workspace = as_bool(key, value)?
            }
            "menu_force_quit" => self.menu_force_quit = as_bool(key, value)?,
            "menu_move_app_to_workspace" => self.menu_move_app_to_workspace = as_bool(key, value)?,
            "menu_close_windows_on_workspace" => {
                self.menu_close_windows_on_workspace = as_bool(key, value)?
            }
            _ => return Err(SettingsError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.click_follows_recent_window && !self.show_windows_before_activation {
            issues.push(
                "click_follows_recent_window has no effect without \
                 show_windows_before_activation"
                    .to_string(),
            );
        }

        issues
    }
}

fn as_bool(key: &str, value: Value) -> Result<bool, SettingsError> {
    value.as_bool().ok_or_else(|| SettingsError::InvalidValue {
        key: key.to_string(),
        reason: format!("expected a boolean, got {value}"),
    })
}

fn as_highlight_mode(key: &str, value: Value) -> Result<HoverHighlightMode, SettingsError> {
    // The original preference widget stores the combo row index.
    if let Some(index) = value.as_u64() {
        return HoverHighlightMode::from_index(index).ok_or_else(|| {
            SettingsError::InvalidValue {
                key: key.to_string(),
                reason: format!("no highlight mode with index {index}"),
            }
        });
    }
    serde_json::from_value(value.clone()).map_err(|_| SettingsError::InvalidValue {
        key: key.to_string(),
        reason: format!("expected disabled/titles/titles_and_opacity, got {value}"),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn defaults_enable_navigation_features() {
        let settings = Settings::default();
        assert!(settings.shift_reorders_workspace);
        assert!(settings.scroll_switches_app_workspace);
        assert!(settings.show_windows_before_activation);
        assert_eq!(
            settings.hover_highlights_windows,
            HoverHighlightMode::TitlesAndOpacity
        );
        assert!(!settings.menu_force_quit);
    }

    #[test]
    fn toml_round_trip() {
        let mut settings = Settings::default();
        settings.hover_highlights_windows = HoverHighlightMode::Titles;
        settings.space_activates_dock = true;

        let raw = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&raw).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let raw = "shift_reorders_workspace = true\nunknown_flag = 1\n";
        assert!(toml::from_str::<Settings>(raw).is_err());
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let parsed: Settings = toml::from_str("space_activates_dock = true\n").unwrap();
        assert!(parsed.space_activates_dock);
        assert!(parsed.show_windows_before_activation);
    }

    #[test]
    fn set_updates_bool_and_mode_keys() {
        let mut settings = Settings::default();
        settings.set("menu_force_quit", json!(true)).unwrap();
        assert!(settings.menu_force_quit);

        settings.set("hover_highlights_windows", json!("titles")).unwrap();
        assert_eq!(settings.hover_highlights_windows, HoverHighlightMode::Titles);

        // combo index form, as stored by the original preferences dialog
        settings.set("hover_highlights_windows", json!(0)).unwrap();
        assert_eq!(
            settings.hover_highlights_windows,
            HoverHighlightMode::Disabled
        );
    }

    #[test]
    fn set_rejects_unknown_key_and_bad_values() {
        let mut settings = Settings::default();
        assert!(matches!(
            settings.set("does_not_exist", json!(true)),
            Err(SettingsError::UnknownKey(_))
        ));
        assert!(matches!(
            settings.set("menu_force_quit", json!("yes")),
            Err(SettingsError::InvalidValue { .. })
        ));
        assert!(matches!(
            settings.set("hover_highlights_windows", json!(9)),
            Err(SettingsError::InvalidValue { .. })
        ));
    }

    #[test]
    fn validate_flags_recent_window_without_show_windows() {
        let mut settings = Settings::default();
        settings.click_follows_recent_window = true;
        settings.show_windows_before_activation = false;
        assert_eq!(settings.validate().len(), 1);

        settings.show_windows_before_activation = true;
        assert!(settings.validate().is_empty());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut settings = Settings::default();
        settings.menu_move_app_to_workspace = true;
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded, settings);
    }
}
