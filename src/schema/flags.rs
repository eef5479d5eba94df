//! Flag sets and the flattening trait behind every configuration type.

use std::collections::BTreeMap;

/// Build the flag name for `field`, prefixed by its region when nested.
///
/// ```
/// use gum::schema::flag_name;
///
/// assert_eq!(flag_name("", "height"), "--height");
/// assert_eq!(flag_name("cursor", "foreground"), "--cursor-foreground");
/// ```
pub fn flag_name(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        format!("--{}", field)
    } else {
        format!("--{}-{}", prefix, field)
    }
}

/// Join a parent prefix and a region slot into the prefix used for the region.
pub fn region_prefix(prefix: &str, region: &str) -> String {
    if prefix.is_empty() {
        region.to_string()
    } else {
        format!("{}-{}", prefix, region)
    }
}

/// Conversion of a field value into the single token passed after its flag.
///
/// `None` means the value contributes no token at all.
pub trait FlagValue {
    /// Render the value as a flag token.
    fn flag_value(&self) -> Option<String>;
}

macro_rules! display_flag_value {
    ($($ty:ty),*) => {
        $(
            impl FlagValue for $ty {
                fn flag_value(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

display_flag_value!(String, u8, u16, u32, u64, usize, i32, i64);

impl<T: FlagValue> FlagValue for Option<T> {
    fn flag_value(&self) -> Option<String> {
        self.as_ref().and_then(FlagValue::flag_value)
    }
}

/// Lists (margin, padding) become one space-joined token.
impl<T: FlagValue> FlagValue for Vec<T> {
    fn flag_value(&self) -> Option<String> {
        let parts: Vec<String> = self.iter().filter_map(FlagValue::flag_value).collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

/// Key/value flags plus value-less boolean flags.
///
/// Keys are unique: inserting an existing key replaces its value, so a
/// region flattened after its parent wins any collision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSet {
    kv_args: BTreeMap<String, String>,
    flags: Vec<String>,
}

impl FlagSet {
    /// Create an empty flag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key/value flag, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.kv_args.insert(key.into(), value.into())
    }

    /// Register a boolean flag. Registering the same flag twice is a no-op.
    pub fn push_flag(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.flags.contains(&name) {
            self.flags.push(name);
        }
    }

    /// Value recorded for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.kv_args.get(key).map(String::as_str)
    }

    /// Whether the boolean flag `name` is set.
    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.iter().any(|flag| flag == name)
    }

    /// Key/value flags.
    pub fn kv_args(&self) -> &BTreeMap<String, String> {
        &self.kv_args
    }

    /// Boolean flags in registration order.
    pub fn flags(&self) -> &[String] {
        &self.flags
    }

    /// True when neither key/value nor boolean flags are present.
    pub fn is_empty(&self) -> bool {
        self.kv_args.is_empty() && self.flags.is_empty()
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.kv_args.len() + self.flags.len()
    }

    /// Merge `other` into `self`; `other` wins key collisions.
    pub fn merge(&mut self, other: FlagSet) {
        self.kv_args.extend(other.kv_args);
        for flag in other.flags {
            self.push_flag(flag);
        }
    }

    /// Split into the key/value map and the boolean flag list.
    pub fn into_parts(self) -> (BTreeMap<String, String>, Vec<String>) {
        (self.kv_args, self.flags)
    }

    /// Render as command tokens: `--key=value` pairs, then boolean flags.
    pub fn to_args(&self) -> Vec<String> {
        self.kv_args
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .chain(self.flags.iter().cloned())
            .collect()
    }

    /// Record `value` under `--{prefix}-{field}` if it differs from `default`.
    pub fn set_changed<T>(&mut self, prefix: &str, field: &str, value: &T, default: &T)
    where
        T: FlagValue + PartialEq,
    {
        if value == default {
            return;
        }
        if let Some(token) = value.flag_value() {
            self.insert(flag_name(prefix, field), token);
        }
    }

    /// Record `--{prefix}-{field}` if `value` is true and differs from `default`.
    pub fn switch_changed(&mut self, prefix: &str, field: &str, value: bool, default: bool) {
        if value && value != default {
            self.push_flag(flag_name(prefix, field));
        }
    }
}

/// Flattening of a configuration object into a [`FlagSet`].
///
/// Implementors compare every field against their `Default` value and emit
/// only the fields that changed. Nested regions are flattened with
/// [`region_prefix`] after the parent's own fields.
pub trait Flatten {
    /// Write this configuration's flags into `out` under `prefix`.
    fn flatten_into(&self, prefix: &str, out: &mut FlagSet);

    /// Flatten as a top-level configuration.
    fn flatten(&self) -> FlagSet {
        let mut out = FlagSet::new();
        self.flatten_into("", &mut out);
        out
    }
}
