//! Configuration objects and their flattening into `gum` flags.
//!
//! Every configuration type implements [`Flatten`]: fields still at their
//! default value are skipped, enums are written as their lowercase tag,
//! lists are space-joined and `true` booleans become value-less flags.
//! Nested regions (item, cursor, selected, spinner, title) are written with
//! a `--{region}-{field}` name.
//!
//! ```
//! use gum::schema::{ChooseConfig, Color, Flatten};
//!
//! let mut config = ChooseConfig::default();
//! config.cursor_style.foreground = Some(Color::Ansi(212));
//!
//! let flags = config.flatten();
//! assert_eq!(flags.get("--cursor-foreground"), Some("212"));
//! assert_eq!(flags.len(), 1);
//! ```

pub mod choose;
pub mod flags;
pub mod spin;
pub mod style;

pub use self::choose::ChooseConfig;
pub use self::flags::{flag_name, region_prefix, FlagSet, FlagValue, Flatten};
pub use self::spin::{SpinConfig, Spinner};
pub use self::style::{Align, Border, Color, StyleConfig};
