//! Shared color data model: the `Rgb` triple and the `Channel` identifier.
//!
//! # Value representation
//!
//! Channel values live in `[0.0, 1.0]` as `f32`, matching the sliders'
//! native range. They are only quantized to 8-bit at the `Color32` boundary,
//! so a value entered as `0.125` keeps its full precision in the model while
//! the label and text field show its two-decimal rounding. Alpha is fixed at
//! 1.0 everywhere.

use std::fmt;

use eframe::egui::Color32;

use crate::error::{AppError, Result};

// ── Channel ────────────────────────────────────────────────────────────────────

/// One of the three color components.
///
/// Replaces integer widget tags: every slider/label/field triple is addressed
/// through its `Channel`, and `index` gives the slot in per-channel arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    /// Accent color for this channel's slider track.
    pub fn tint(self) -> Color32 {
        match self {
            Channel::Red => Color32::from_rgb(220, 60, 50),
            Channel::Green => Color32::from_rgb(60, 180, 80),
            Channel::Blue => Color32::from_rgb(60, 110, 220),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        };
        f.write_str(name)
    }
}

// ── Rgb ────────────────────────────────────────────────────────────────────────

/// An opaque RGB color with normalized `f32` channels.
///
/// Immutable once constructed; every channel change builds a new `Rgb`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    pub fn channel(self, channel: Channel) -> f32 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Parse a `#RRGGBB` string (leading `#` optional).
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(AppError::InvalidColorArg(s.to_string()));
        }
        let byte = |range| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| AppError::InvalidColorArg(s.to_string()))
        };
        Ok(Self::from_color32(Color32::from_rgb(
            byte(0..2)?,
            byte(2..4)?,
            byte(4..6)?,
        )))
    }

    pub fn from_color32(c: Color32) -> Self {
        Self::new(
            c.r() as f32 / 255.0,
            c.g() as f32 / 255.0,
            c.b() as f32 / 255.0,
        )
    }

    pub fn to_color32(self) -> Color32 {
        Color32::from_rgb(
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        )
    }
}

impl Default for Rgb {
    /// White, the platform default background.
    fn default() -> Self {
        Self {
            r: 1.0,
            g: 1.0,
            b: 1.0,
        }
    }
}

// ── Formatting & parsing ───────────────────────────────────────────────────────

/// Format a channel value the way every label and text field displays it.
pub fn format_value(value: f32) -> String {
    format!("{value:.2}")
}

/// Parse text-field content into a channel value.
///
/// Accepts any `f32` in `[0.0, 1.0]` (surrounding whitespace ignored);
/// rejects everything else, including NaN and infinities, which fail the
/// range check.
pub fn parse_value(channel: Channel, text: &str) -> Result<f32> {
    let invalid = || AppError::InvalidChannelInput {
        channel,
        input: text.to_string(),
    };
    let value = text.trim().parse::<f32>().map_err(|_| invalid())?;
    if !(0.0..=1.0).contains(&value) {
        return Err(invalid());
    }
    Ok(value)
}
