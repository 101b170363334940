//! File naming styles.
//!
//! A naming style is written with the two markers `go` and `zero`, in that
//! order. The casing of each marker picks how words are cased and whatever
//! sits between the markers becomes the word separator:
//!
//! | style     | `listUsersHandler` becomes |
//! |-----------|----------------------------|
//! | `gozero`  | `listusershandler`         |
//! | `go_zero` | `list_users_handler`       |
//! | `go-zero` | `list-users-handler`       |
//! | `goZero`  | `listUsersHandler`         |
//! | `GoZero`  | `ListUsersHandler`         |
//!
//! The `go` marker styles the first word, the `zero` marker every following
//! word. Text before `go` and after `zero` is kept as a prefix and suffix.

use crate::utils::{split_words, title};

/// Style used when none is configured.
pub const DEFAULT_NAMING_FORMAT: &str = "gozero";

const GO_MARKER: &str = "GO";
const ZERO_MARKER: &str = "ZERO";

/// Error returned for a naming style that cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported naming format '{format}': {reason}")]
pub struct NamingFormatError {
    pub format: String,
    pub reason: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordCase {
    Lower,
    Title,
    Upper,
}

impl WordCase {
    fn from_marker(marker: &str) -> Option<Self> {
        let mut chars = marker.chars();
        let first = chars.next()?;
        let rest: String = chars.collect();

        if marker.chars().all(|c| c.is_ascii_lowercase()) {
            Some(Self::Lower)
        } else if marker.chars().all(|c| c.is_ascii_uppercase()) {
            Some(Self::Upper)
        } else if first.is_ascii_uppercase() && rest.chars().all(|c| c.is_ascii_lowercase()) {
            Some(Self::Title)
        } else {
            None
        }
    }

    fn apply(self, word: &str) -> String {
        match self {
            Self::Lower => word.to_lowercase(),
            Self::Upper => word.to_uppercase(),
            Self::Title => title(&word.to_lowercase()),
        }
    }
}

/// Format `name` into a file name stem using the naming `format`.
///
/// An empty format falls back to [`DEFAULT_NAMING_FORMAT`].
pub fn format_file_name(format: &str, name: &str) -> Result<String, NamingFormatError> {
    let format = if format.trim().is_empty() {
        DEFAULT_NAMING_FORMAT
    } else {
        format
    };
    let error = |reason| NamingFormatError {
        format: format.to_string(),
        reason,
    };

    // ASCII upper-casing keeps byte offsets aligned with `format`.
    let upper = format.to_ascii_uppercase();
    let go_at = upper
        .find(GO_MARKER)
        .ok_or_else(|| error("missing 'go' marker"))?;
    let zero_at = upper[go_at + GO_MARKER.len()..]
        .find(ZERO_MARKER)
        .map(|offset| go_at + GO_MARKER.len() + offset)
        .ok_or_else(|| error("missing 'zero' marker after 'go'"))?;

    let before = &format[..go_at];
    let go_marker = &format[go_at..go_at + GO_MARKER.len()];
    let separator = &format[go_at + GO_MARKER.len()..zero_at];
    let zero_marker = &format[zero_at..zero_at + ZERO_MARKER.len()];
    let after = &format[zero_at + ZERO_MARKER.len()..];

    let first_case =
        WordCase::from_marker(go_marker).ok_or_else(|| error("mixed case in 'go' marker"))?;
    let rest_case =
        WordCase::from_marker(zero_marker).ok_or_else(|| error("mixed case in 'zero' marker"))?;

    let words = split_words(name);
    let body = words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i == 0 {
                first_case.apply(word)
            } else {
                rest_case.apply(word)
            }
        })
        .collect::<Vec<_>>()
        .join(separator);

    Ok(format!("{}{}{}", before, body, after))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: &str = "listUsersHandler";

    #[test]
    fn test_lowercase_joined() {
        assert_eq!(format_file_name("gozero", NAME).unwrap(), "listusershandler");
    }

    #[test]
    fn test_default_when_empty() {
        assert_eq!(format_file_name("", NAME).unwrap(), "listusershandler");
        assert_eq!(format_file_name("  ", NAME).unwrap(), "listusershandler");
    }

    #[test]
    fn test_snake_and_kebab() {
        assert_eq!(format_file_name("go_zero", NAME).unwrap(), "list_users_handler");
        assert_eq!(format_file_name("go-zero", NAME).unwrap(), "list-users-handler");
    }

    #[test]
    fn test_camel_and_pascal() {
        assert_eq!(format_file_name("goZero", NAME).unwrap(), "listUsersHandler");
        assert_eq!(format_file_name("GoZero", NAME).unwrap(), "ListUsersHandler");
        assert_eq!(format_file_name("GO_ZERO", NAME).unwrap(), "LIST_USERS_HANDLER");
    }

    #[test]
    fn test_prefix_and_suffix_kept() {
        assert_eq!(
            format_file_name("x_go_zero_gen", "getUser").unwrap(),
            "x_get_user_gen"
        );
    }

    #[test]
    fn test_snake_input() {
        assert_eq!(format_file_name("goZero", "get_user").unwrap(), "getUser");
    }

    #[test]
    fn test_unsupported_formats() {
        assert!(format_file_name("snake", NAME).is_err());
        assert!(format_file_name("zerogo", NAME).is_err());
        assert!(format_file_name("go", NAME).is_err());
        assert!(format_file_name("gOzero", NAME).is_err());
        assert!(format_file_name("gozEro", NAME).is_err());
    }

    #[test]
    fn test_error_message_names_format() {
        let err = format_file_name("camel", NAME).unwrap_err();
        assert_eq!(err.format, "camel");
        assert!(err.to_string().contains("unsupported naming format 'camel'"));
    }
}
