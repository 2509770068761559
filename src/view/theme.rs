//! Panel colors.

use crate::config::ThemeConfig;
use ratatui::style::{Color, Style};

/// Drawable areas of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Waveform,
    Ruler,
}

/// Resolved foreground and background colors for each panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    waveform: (Color, Color),
    ruler: (Color, Color),
}

impl Theme {
    /// Builds a theme from config strings, falling back to the default color
    /// for any entry that is not a valid "#rrggbb" value.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let defaults = ThemeConfig::default();
        let pick = |value: &str, fallback: &str| {
            parse_hex(value).unwrap_or_else(|| {
                tracing::warn!("Invalid theme color '{}', using {}", value, fallback);
                parse_hex(fallback).unwrap_or(Color::Reset)
            })
        };

        Self {
            waveform: (
                pick(&config.waveform_fg, &defaults.waveform_fg),
                pick(&config.waveform_bg, &defaults.waveform_bg),
            ),
            ruler: (
                pick(&config.ruler_fg, &defaults.ruler_fg),
                pick(&config.ruler_bg, &defaults.ruler_bg),
            ),
        }
    }

    pub fn style(&self, panel: Panel) -> Style {
        let (fg, bg) = match panel {
            Panel::Waveform => self.waveform,
            Panel::Ruler => self.ruler,
        };
        Style::default().fg(fg).bg(bg)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

/// Parses "#rrggbb" or "#rgb".
pub fn parse_hex(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            let mut rgb = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                rgb[i] = v * 17;
            }
            Some(Color::Rgb(rgb[0], rgb[1], rgb[2]))
        }
        _ => None,
    }
}
