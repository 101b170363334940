//! Shared string helpers for code generation.

/// Upper-case the first character (e.g., "getUser" -> "GetUser")
pub fn title(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Split an identifier into words at `_`, `-`, spaces and lower-to-upper
/// camel boundaries (e.g., "listUsers_v2" -> ["list", "Users", "v2"]).
pub fn split_words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in s.chars() {
        if matches!(c, '_' | '-' | ' ') {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Join Go package path segments with `/`, dropping empty segments and
/// surrounding slashes.
pub fn join_packages<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|s| s.as_ref().trim_matches('/'))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Lexically clean a `/`-separated path the way Go's `path.Clean` does:
/// empty and `.` segments are dropped, `..` removes the segment before it
/// (e.g., "a//b/../c/" -> "a/c"). A `..` with nothing left to remove is kept
/// on relative paths and dropped on rooted ones. An empty result is ".".
pub fn clean_path(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if rooted => {}
                _ => segments.push(segment),
            },
            _ => segments.push(segment),
        }
    }

    let joined = segments.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{}", joined),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title() {
        assert_eq!(title("getUser"), "GetUser");
        assert_eq!(title("GetUser"), "GetUser");
        assert_eq!(title("x"), "X");
        assert_eq!(title(""), "");
    }

    #[test]
    fn test_split_words() {
        assert_eq!(
            split_words("listUsersHandler"),
            vec!["list", "Users", "Handler"]
        );
        assert_eq!(split_words("get_user"), vec!["get", "user"]);
        assert_eq!(split_words("get-user"), vec!["get", "user"]);
        assert_eq!(split_words("GetUser"), vec!["Get", "User"]);
        assert_eq!(split_words("userV2Handler"), vec!["user", "V2", "Handler"]);
        assert_eq!(split_words("HTTP"), vec!["HTTP"]);
        assert!(split_words("").is_empty());
        assert!(split_words("__").is_empty());
    }

    #[test]
    fn test_join_packages() {
        assert_eq!(
            join_packages(&["github.com/acme/shop", "internal/logic"]),
            "github.com/acme/shop/internal/logic"
        );
        assert_eq!(
            join_packages(&["github.com/acme/shop/", "/internal/svc"]),
            "github.com/acme/shop/internal/svc"
        );
        assert_eq!(join_packages(&["", "internal/types"]), "internal/types");
    }

    #[test]
    fn test_clean_path() {
        assert_eq!(clean_path("internal/handler/."), "internal/handler");
        assert_eq!(clean_path("internal/handler/a//b"), "internal/handler/a/b");
        assert_eq!(clean_path("internal/handler/x/../y"), "internal/handler/y");
        assert_eq!(clean_path("internal/handler/../../etc"), "etc");
        assert_eq!(clean_path("internal/handler/../../../x"), "../x");
        assert_eq!(clean_path("a/.."), ".");
        assert_eq!(clean_path(""), ".");
        assert_eq!(clean_path("/../a/"), "/a");
        assert_eq!(clean_path("/"), "/");
    }
}
