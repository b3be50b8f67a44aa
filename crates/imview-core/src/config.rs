use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{
    APP_TITLE, CANVAS_BG_COLOR, GRID_COLOR, GRID_INTERVAL, IMAGE_EXTENSIONS, MAX_SCALE,
    WINDOW_HEIGHT_FRACTION, WINDOW_WIDTH_FRACTION, WINDOW_Y_OFFSET, ZOOM_IN_FACTOR,
    ZOOM_OUT_FACTOR,
};
use crate::error::{Result, ViewerError};
use crate::window::Anchor;

/// Everything the viewer reads from `imview.toml`. Missing keys fall back to defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub max_scale: f64,
    pub grid_interval: i32,
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
    /// Allowed file extensions, without the leading dot.
    pub extensions: Vec<String>,
    pub filter: ScaleFilter,
    pub background: [u8; 3],
    pub grid_color: [u8; 3],
    pub shortcuts: ShortcutConfig,
    pub window: WindowConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            max_scale: MAX_SCALE,
            grid_interval: GRID_INTERVAL,
            zoom_in_factor: ZOOM_IN_FACTOR,
            zoom_out_factor: ZOOM_OUT_FACTOR,
            extensions: IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            filter: ScaleFilter::default(),
            background: CANVAS_BG_COLOR,
            grid_color: GRID_COLOR,
            shortcuts: ShortcutConfig::default(),
            window: WindowConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Reject values the viewer cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(self.max_scale > 0.0) {
            return Err(ViewerError::InvalidConfig(format!(
                "max_scale must be > 0 (got {})",
                self.max_scale
            )));
        }
        if !(self.zoom_in_factor > 0.0) || !(self.zoom_out_factor > 0.0) {
            return Err(ViewerError::InvalidConfig(
                "zoom factors must be > 0".into(),
            ));
        }
        if self.extensions.iter().all(|e| e.trim_start_matches('.').is_empty()) {
            return Err(ViewerError::InvalidConfig(
                "at least one image extension is required".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.window.width_fraction)
            || !(0.0..=1.0).contains(&self.window.height_fraction)
        {
            return Err(ViewerError::InvalidConfig(
                "window fractions must be within 0.0..=1.0".into(),
            ));
        }
        Ok(())
    }

    /// Extensions normalised to lowercase without a leading dot.
    pub fn normalized_extensions(&self) -> Vec<String> {
        self.extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect()
    }
}

/// Sampler used when the scaled image is painted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleFilter {
    Nearest,
    #[default]
    Linear,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortcutConfig {
    pub open: Accelerator,
    pub quit: Accelerator,
    pub fit: Accelerator,
    pub toggle_grid: Accelerator,
    /// Held while scrolling to zoom, as an alternative to the right button.
    pub zoom_modifier: ModifierKey,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        Self {
            open: Accelerator::ctrl("O"),
            quit: Accelerator::ctrl("Q"),
            fit: Accelerator::ctrl("F"),
            toggle_grid: Accelerator::ctrl("G"),
            zoom_modifier: ModifierKey::Ctrl,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width_fraction: f32,
    pub height_fraction: f32,
    pub anchor: Anchor,
    pub x_offset: i32,
    pub y_offset: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: APP_TITLE.to_string(),
            width_fraction: WINDOW_WIDTH_FRACTION,
            height_fraction: WINDOW_HEIGHT_FRACTION,
            anchor: Anchor::N,
            x_offset: 0,
            y_offset: WINDOW_Y_OFFSET,
        }
    }
}

/// A keyboard shortcut such as `Ctrl+Shift+O`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Accelerator {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    /// Key name; single letters are stored uppercase.
    pub key: String,
}

impl Accelerator {
    pub fn ctrl(key: &str) -> Self {
        Self {
            ctrl: true,
            shift: false,
            alt: false,
            key: key.to_string(),
        }
    }
}

impl FromStr for Accelerator {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ViewerError::InvalidAccelerator(s.to_string());

        let mut parts: Vec<&str> = s.split('+').map(str::trim).collect();
        // "Ctrl++" binds the plus key.
        if s.trim_end().ends_with("++") {
            parts.truncate(parts.len().saturating_sub(2));
            parts.push("Plus");
        }
        let key = parts.pop().filter(|k| !k.is_empty()).ok_or_else(invalid)?;
        if ModifierKey::from_str(key).is_ok() {
            return Err(invalid());
        }

        let mut acc = Self {
            ctrl: false,
            shift: false,
            alt: false,
            key: normalize_key(key),
        };
        for part in parts {
            match ModifierKey::from_str(part).map_err(|_| invalid())? {
                ModifierKey::Ctrl => acc.ctrl = true,
                ModifierKey::Shift => acc.shift = true,
                ModifierKey::Alt => acc.alt = true,
            }
        }
        Ok(acc)
    }
}

impl TryFrom<String> for Accelerator {
    type Error = ViewerError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Accelerator> for String {
    fn from(acc: Accelerator) -> Self {
        acc.to_string()
    }
}

impl fmt::Display for Accelerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            write!(f, "Ctrl+")?;
        }
        if self.shift {
            write!(f, "Shift+")?;
        }
        if self.alt {
            write!(f, "Alt+")?;
        }
        write!(f, "{}", self.key)
    }
}

fn normalize_key(key: &str) -> String {
    if key.chars().count() == 1 {
        key.to_ascii_uppercase()
    } else {
        key.to_string()
    }
}

/// A bare modifier key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ModifierKey {
    #[default]
    Ctrl,
    Shift,
    Alt,
}

impl FromStr for ModifierKey {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "ctrl" | "control" | "cmd" | "command" => Ok(Self::Ctrl),
            "shift" => Ok(Self::Shift),
            "alt" | "option" => Ok(Self::Alt),
            _ => Err(ViewerError::InvalidAccelerator(s.to_string())),
        }
    }
}

impl TryFrom<String> for ModifierKey {
    type Error = ViewerError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<ModifierKey> for String {
    fn from(m: ModifierKey) -> Self {
        m.to_string()
    }
}

impl fmt::Display for ModifierKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ctrl => write!(f, "Ctrl"),
            Self::Shift => write!(f, "Shift"),
            Self::Alt => write!(f, "Alt"),
        }
    }
}
