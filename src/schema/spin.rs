//! Options for `gum spin`.

use std::fmt;

use super::flags::{region_prefix, FlagSet, FlagValue, Flatten};
use super::style::{Align, StyleConfig};

/// Spinner animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
#[allow(missing_docs)]
pub enum Spinner {
    Line,
    Dot,
    MiniDot,
    Jump,
    Pulse,
    Points,
    Globe,
    Moon,
    Monkey,
    Meter,
    Hamburger,
}

impl Spinner {
    /// Tag understood by `gum`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Spinner::Line => "line",
            Spinner::Dot => "dot",
            Spinner::MiniDot => "minidot",
            Spinner::Jump => "jump",
            Spinner::Pulse => "pulse",
            Spinner::Points => "points",
            Spinner::Globe => "globe",
            Spinner::Moon => "moon",
            Spinner::Monkey => "monkey",
            Spinner::Meter => "meter",
            Spinner::Hamburger => "hamburger",
        }
    }
}

impl fmt::Display for Spinner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FlagValue for Spinner {
    fn flag_value(&self) -> Option<String> {
        Some(self.as_str().to_string())
    }
}

/// Options for `gum spin`, including the spinner and title regions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default, deny_unknown_fields))]
pub struct SpinConfig {
    /// Alignment of the spinner with regard to the title.
    pub align: Option<Align>,
    /// Spinner animation.
    pub spinner: Option<Spinner>,
    /// Text shown next to the spinner.
    pub title: Option<String>,
    /// Forward the wrapped command's output once it finishes.
    pub show_output: bool,
    /// Style of the spinner region.
    pub spinner_style: StyleConfig,
    /// Style of the title region.
    pub title_style: StyleConfig,
}

impl Flatten for SpinConfig {
    fn flatten_into(&self, prefix: &str, out: &mut FlagSet) {
        let defaults = Self::default();

        out.set_changed(prefix, "align", &self.align, &defaults.align);
        out.set_changed(prefix, "spinner", &self.spinner, &defaults.spinner);
        out.set_changed(prefix, "title", &self.title, &defaults.title);

        out.switch_changed(prefix, "show-output", self.show_output, defaults.show_output);

        self.spinner_style.flatten_into(&region_prefix(prefix, "spinner"), out);
        self.title_style.flatten_into(&region_prefix(prefix, "title"), out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Color;

    #[test]
    fn test_default_spin_flattens_to_nothing() {
        assert!(SpinConfig::default().flatten().is_empty());
    }

    #[test]
    fn test_spin_fields_use_enum_tags() {
        let config = SpinConfig {
            align: Some(Align::Right),
            spinner: Some(Spinner::MiniDot),
            title: Some("Building...".to_string()),
            show_output: true,
            ..SpinConfig::default()
        };
        let flags = config.flatten();
        assert_eq!(flags.get("--align"), Some("right"));
        assert_eq!(flags.get("--spinner"), Some("minidot"));
        assert_eq!(flags.get("--title"), Some("Building..."));
        assert_eq!(flags.flags(), ["--show-output"]);
    }

    #[test]
    fn test_spinner_region_does_not_clobber_spinner_kind() {
        let mut config = SpinConfig {
            spinner: Some(Spinner::Globe),
            ..SpinConfig::default()
        };
        config.spinner_style.foreground = Some(Color::Ansi(212));
        config.title_style.bold = true;

        let flags = config.flatten();
        assert_eq!(flags.get("--spinner"), Some("globe"));
        assert_eq!(flags.get("--spinner-foreground"), Some("212"));
        assert_eq!(flags.flags(), ["--title-bold"]);
    }
}
