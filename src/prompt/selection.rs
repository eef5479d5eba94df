//! Mapping returned display text back to the candidates it came from.

use std::collections::HashSet;
use std::fmt::Display;

use tracing::warn;

use crate::error::{GumError, GumResult};

/// A chosen candidate together with its position in the original list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<T> {
    /// Zero-based index into the candidate list.
    pub index: usize,
    /// The candidate itself.
    pub selection: T,
}

/// Default projection from a candidate to its display string.
pub fn normalize_choice<T: Display + ?Sized>(choice: &T) -> String {
    choice.to_string().trim().to_string()
}

/// Display strings for `choices`, warning when two of them collide or when
/// one spans several lines and so can never be matched.
pub(crate) fn display_strings<T, F>(choices: &[T], display: F) -> Vec<String>
where
    F: Fn(&T) -> String,
{
    let rendered: Vec<String> = choices.iter().map(display).collect();

    let mut seen = HashSet::new();
    for text in &rendered {
        if text.contains(['\n', '\r']) {
            warn!(display = %text, "display string contains a line break and cannot be selected");
        }
        if !seen.insert(text.as_str()) {
            warn!(display = %text, "duplicate display string, the first candidate will win");
        }
    }

    rendered
}

/// Find the first candidate whose display string equals `line`.
pub(crate) fn resolve<T: Clone>(
    choices: &[T],
    display: &[String],
    line: &str,
) -> GumResult<Selection<T>> {
    let index = display
        .iter()
        .position(|text| text == line)
        .ok_or_else(|| GumError::selection_not_found(line))?;

    Ok(Selection {
        index,
        selection: choices[index].clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_display_text() {
        assert_eq!(normalize_choice(&"  padded  "), "padded");
        assert_eq!(normalize_choice(&42), "42");
    }

    #[test]
    fn test_resolve_finds_index() {
        let choices = vec![10, 20, 30];
        let display = display_strings(&choices, |n| format!("#{}", n));
        let selection = resolve(&choices, &display, "#30").unwrap();
        assert_eq!(selection, Selection { index: 2, selection: 30 });
    }

    #[test]
    fn test_resolve_first_match_wins_on_duplicates() {
        let choices = vec!["x", "y", "x"];
        let display = display_strings(&choices, |s| s.to_string());
        assert_eq!(resolve(&choices, &display, "x").unwrap().index, 0);
    }

    #[test]
    fn test_multiline_display_never_resolves() {
        let choices = vec!["one\ntwo"];
        let display = display_strings(&choices, |s| s.to_string());
        assert_eq!(display, ["one\ntwo"]);
        assert!(resolve(&choices, &display, "one").is_err());
    }

    #[test]
    fn test_resolve_unknown_text() {
        let choices = vec!["x"];
        let display = display_strings(&choices, |s| s.to_string());
        let err = resolve(&choices, &display, "z").unwrap_err();
        assert!(matches!(err, GumError::SelectionNotFound { ref text } if text == "z"));
    }
}
