//! Options for `gum choose`.

use super::flags::{region_prefix, FlagSet, Flatten};
use super::style::StyleConfig;

/// Options for `gum choose`, including the item, cursor and selected regions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default, deny_unknown_fields))]
pub struct ChooseConfig {
    /// Prefix drawn in front of the highlighted item.
    pub cursor_prefix: Option<String>,
    /// Height of the list.
    pub height: Option<u16>,
    /// Maximum number of options to pick.
    pub limit: Option<u32>,
    /// Prefix drawn in front of picked items.
    pub selected_prefix: Option<String>,
    /// Prefix drawn in front of items not picked.
    pub unselected_prefix: Option<String>,
    /// Header line shown above the list.
    pub header: Option<String>,
    /// Pick an unlimited number of options (ignores `limit`).
    pub no_limit: bool,
    /// Style of the item region.
    pub item_style: StyleConfig,
    /// Style of the cursor region.
    pub cursor_style: StyleConfig,
    /// Style of the selected region.
    pub selected_style: StyleConfig,
}

impl Flatten for ChooseConfig {
    fn flatten_into(&self, prefix: &str, out: &mut FlagSet) {
        let defaults = Self::default();

        out.set_changed(prefix, "cursor-prefix", &self.cursor_prefix, &defaults.cursor_prefix);
        out.set_changed(prefix, "height", &self.height, &defaults.height);
        out.set_changed(prefix, "limit", &self.limit, &defaults.limit);
        out.set_changed(prefix, "selected-prefix", &self.selected_prefix, &defaults.selected_prefix);
        out.set_changed(prefix, "unselected-prefix", &self.unselected_prefix, &defaults.unselected_prefix);
        out.set_changed(prefix, "header", &self.header, &defaults.header);

        out.switch_changed(prefix, "no-limit", self.no_limit, defaults.no_limit);

        self.item_style.flatten_into(&region_prefix(prefix, "item"), out);
        self.cursor_style.flatten_into(&region_prefix(prefix, "cursor"), out);
        self.selected_style.flatten_into(&region_prefix(prefix, "selected"), out);
    }
}
