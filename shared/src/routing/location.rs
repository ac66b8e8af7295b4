use serde::{Deserialize, Serialize};

/// A navigation target split into its URL parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub path: String,
    /// Query string including the leading `?`, or empty.
    pub query: String,
    /// Fragment including the leading `#`, or empty.
    pub hash: String,
}

impl Location {
    pub fn parse(full_path: &str) -> Self {
        let (rest, hash) = match full_path.find('#') {
            Some(index) => full_path.split_at(index),
            None => (full_path, ""),
        };
        let (path, query) = match rest.find('?') {
            Some(index) => rest.split_at(index),
            None => (rest, ""),
        };

        Self {
            path: if path.is_empty() { "/".to_string() } else { path.to_string() },
            query: query.to_string(),
            hash: hash.to_string(),
        }
    }

    pub fn full_path(&self) -> String {
        format!("{}{}{}", self.path, self.query, self.hash)
    }

    /// Percent-decoded fragment without `#`, if there is one.
    pub fn fragment_id(&self) -> Option<String> {
        let raw = self.hash.strip_prefix('#')?;
        if raw.is_empty() {
            return None;
        }
        let decoded = urlencoding::decode(raw)
            .map(|id| id.into_owned())
            .unwrap_or_else(|_| raw.to_string());
        Some(decoded)
    }
}

/// Removes the history base from a browser path. Paths outside the base are
/// returned unchanged.
pub fn strip_base(full_path: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        return full_path.to_string();
    }
    match full_path.strip_prefix(base) {
        Some(rest) if rest.starts_with('/') => rest.to_string(),
        Some(rest) if rest.is_empty() || rest.starts_with(['?', '#']) => format!("/{}", rest),
        _ => full_path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_parse_all_parts() {
        let location = Location::parse("/about?tab=team#history");
        assert_eq!(
            location,
            Location {
                path: "/about".to_string(),
                query: "?tab=team".to_string(),
                hash: "#history".to_string(),
            }
        );
        assert_eq!(location.full_path(), "/about?tab=team#history");
    }

    #[test]
    fn test_hash_may_contain_question_mark() {
        let location = Location::parse("/faq#what?");
        assert_eq!(location.path, "/faq");
        assert_eq!(location.query, "");
        assert_eq!(location.hash, "#what?");
    }

    #[rstest]
    #[case("/x#section", Some("section"))]
    #[case("/x#caf%C3%A9", Some("café"))]
    #[case("/x#", None)]
    #[case("/x", None)]
    fn test_fragment_id(#[case] full_path: &str, #[case] expected: Option<&str>) {
        assert_eq!(
            Location::parse(full_path).fragment_id().as_deref(),
            expected
        );
    }

    #[rstest]
    #[case("/demo/about", "/demo", "/about")]
    #[case("/demo", "/demo", "/")]
    #[case("/demo?x=1", "/demo/", "/?x=1")]
    #[case("/demonstration", "/demo", "/demonstration")]
    #[case("/about", "/", "/about")]
    fn test_strip_base(#[case] full_path: &str, #[case] base: &str, #[case] expected: &str) {
        assert_eq!(strip_base(full_path, base), expected);
    }
}
