use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::WindowConfig;

/// Compass position of the window on the screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Anchor {
    NW,
    N,
    NE,
    W,
    #[default]
    C,
    E,
    SW,
    S,
    SE,
}

impl FromStr for Anchor {
    type Err = std::convert::Infallible;

    /// Unknown names center the window.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_uppercase().as_str() {
            "NW" => Self::NW,
            "N" => Self::N,
            "NE" => Self::NE,
            "W" => Self::W,
            "E" => Self::E,
            "SW" => Self::SW,
            "S" => Self::S,
            "SE" => Self::SE,
            _ => Self::C,
        })
    }
}

impl From<String> for Anchor {
    fn from(s: String) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl From<Anchor> for String {
    fn from(a: Anchor) -> Self {
        a.to_string()
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NW => "NW",
            Self::N => "N",
            Self::NE => "NE",
            Self::W => "W",
            Self::C => "C",
            Self::E => "E",
            Self::SW => "SW",
            Self::S => "S",
            Self::SE => "SE",
        };
        f.write_str(s)
    }
}

/// Outer window size and top-left position in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowPlacement {
    pub width: i32,
    pub height: i32,
    pub x: i32,
    pub y: i32,
}

impl WindowPlacement {
    /// `WxH+X+Y`, the X11 geometry notation.
    pub fn geometry_string(&self) -> String {
        format!("{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

/// Place a `width x height` window at `anchor` on a `screen_w x screen_h` screen,
/// then shift it by the given offsets.
pub fn place_window(
    screen_w: i32,
    screen_h: i32,
    width: i32,
    height: i32,
    anchor: Anchor,
    x_offset: i32,
    y_offset: i32,
) -> WindowPlacement {
    let center_x = (screen_w - width).div_euclid(2);
    let center_y = (screen_h - height).div_euclid(2);
    let right = screen_w - width;
    let bottom = screen_h - height;

    let (x, y) = match anchor {
        Anchor::NW => (0, 0),
        Anchor::N => (center_x, 0),
        Anchor::NE => (right, 0),
        Anchor::W => (0, center_y),
        Anchor::C => (center_x, center_y),
        Anchor::E => (right, center_y),
        Anchor::SW => (0, bottom),
        Anchor::S => (center_x, bottom),
        Anchor::SE => (right, bottom),
    };

    WindowPlacement {
        width,
        height,
        x: x + x_offset,
        y: y + y_offset,
    }
}

/// Initial placement for a screen of the given size.
pub fn initial_placement(config: &WindowConfig, screen_w: i32, screen_h: i32) -> WindowPlacement {
    let width = (screen_w as f32 * config.width_fraction).round() as i32;
    let height = (screen_h as f32 * config.height_fraction).round() as i32;
    place_window(
        screen_w,
        screen_h,
        width,
        height,
        config.anchor,
        config.x_offset,
        config.y_offset,
    )
}
