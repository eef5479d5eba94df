//! Text style configuration shared by `gum style` and every styled region.

use std::fmt;

use super::flags::{FlagSet, FlagValue, Flatten};

/// A terminal color: an ANSI 256-palette index or a hex string such as `#ff5f87`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(untagged))]
pub enum Color {
    /// Palette index (0-255).
    Ansi(u8),
    /// Hex color, passed through verbatim.
    Hex(String),
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Ansi(index) => write!(f, "{}", index),
            Color::Hex(hex) => write!(f, "{}", hex),
        }
    }
}

impl From<u8> for Color {
    fn from(index: u8) -> Self {
        Color::Ansi(index)
    }
}

impl From<&str> for Color {
    fn from(hex: &str) -> Self {
        Color::Hex(hex.to_string())
    }
}

impl FlagValue for Color {
    fn flag_value(&self) -> Option<String> {
        Some(self.to_string())
    }
}

/// Border drawn around styled text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
#[allow(missing_docs)]
pub enum Border {
    None,
    Hidden,
    Normal,
    Rounded,
    Thick,
    Double,
}

impl Border {
    /// Tag understood by `gum`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Border::None => "none",
            Border::Hidden => "hidden",
            Border::Normal => "normal",
            Border::Rounded => "rounded",
            Border::Thick => "thick",
            Border::Double => "double",
        }
    }
}

/// Text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
#[allow(missing_docs)]
pub enum Align {
    Center,
    Left,
    Top,
    Bottom,
    Right,
}

impl Align {
    /// Tag understood by `gum`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Center => "center",
            Align::Left => "left",
            Align::Top => "top",
            Align::Bottom => "bottom",
            Align::Right => "right",
        }
    }
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FlagValue for Border {
    fn flag_value(&self) -> Option<String> {
        Some(self.as_str().to_string())
    }
}

impl FlagValue for Align {
    fn flag_value(&self) -> Option<String> {
        Some(self.as_str().to_string())
    }
}

/// Style options for a block of text or a prompt region.
///
/// Every field defaults to "unset"; only changed fields are passed to `gum`.
///
/// ```
/// use gum::schema::{Border, Flatten, StyleConfig};
///
/// let style = StyleConfig {
///     border: Some(Border::Rounded),
///     bold: true,
///     ..StyleConfig::default()
/// };
/// let flags = style.flatten();
/// assert_eq!(flags.get("--border"), Some("rounded"));
/// assert!(flags.has_flag("--bold"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default, deny_unknown_fields))]
pub struct StyleConfig {
    /// Border background color.
    pub border_background: Option<Color>,
    /// Border foreground color.
    pub border_foreground: Option<Color>,
    /// Border style.
    pub border: Option<Border>,
    /// Background color.
    pub background: Option<Color>,
    /// Foreground color.
    pub foreground: Option<Color>,
    /// Text alignment.
    pub align: Option<Align>,
    /// Bold text.
    pub bold: bool,
    /// Faint text.
    pub faint: bool,
    /// Italic text.
    pub italic: bool,
    /// Underlined text.
    pub underline: bool,
    /// Struck-through text.
    pub strikethrough: bool,
    /// Text height.
    pub height: Option<u16>,
    /// Text width.
    pub width: Option<u16>,
    /// Margin dimensions in CSS shorthand order (1, 2 or 4 values).
    pub margin: Option<Vec<u16>>,
    /// Padding dimensions in CSS shorthand order (1, 2 or 4 values).
    pub padding: Option<Vec<u16>>,
}

impl Flatten for StyleConfig {
    fn flatten_into(&self, prefix: &str, out: &mut FlagSet) {
        let defaults = Self::default();

        out.set_changed(prefix, "border-background", &self.border_background, &defaults.border_background);
        out.set_changed(prefix, "border-foreground", &self.border_foreground, &defaults.border_foreground);
        out.set_changed(prefix, "border", &self.border, &defaults.border);
        out.set_changed(prefix, "background", &self.background, &defaults.background);
        out.set_changed(prefix, "foreground", &self.foreground, &defaults.foreground);
        out.set_changed(prefix, "align", &self.align, &defaults.align);
        out.set_changed(prefix, "height", &self.height, &defaults.height);
        out.set_changed(prefix, "width", &self.width, &defaults.width);
        out.set_changed(prefix, "margin", &self.margin, &defaults.margin);
        out.set_changed(prefix, "padding", &self.padding, &defaults.padding);

        out.switch_changed(prefix, "bold", self.bold, defaults.bold);
        out.switch_changed(prefix, "faint", self.faint, defaults.faint);
        out.switch_changed(prefix, "italic", self.italic, defaults.italic);
        out.switch_changed(prefix, "underline", self.underline, defaults.underline);
        out.switch_changed(prefix, "strikethrough", self.strikethrough, defaults.strikethrough);
    }
}
