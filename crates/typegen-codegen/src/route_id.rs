//! Route-id parsing.
//!
//! Turns a slash-separated route id such as `blog/[slug]` into its ordered
//! parameter names, optional matcher names, and an anchored regex that
//! matches concrete request paths.
//!
//! Supported bracket forms:
//! - `[name]` matches one path segment
//! - `[...name]` matches any number of segments, including none
//! - `[name=matcher]` records `matcher` alongside the parameter
//! - several parameters may share a segment: `[a]-[b]`
//!
//! # Examples
//!
//! ```
//! use kit_typegen_codegen::route_id::parse_route_id;
//!
//! let parsed = parse_route_id("blog/[slug]").unwrap();
//! assert_eq!(parsed.names, vec!["slug"]);
//! assert!(parsed.pattern.is_match("/blog/hello-world"));
//!
//! let rest = parse_route_id("docs/[...path]").unwrap();
//! assert_eq!(rest.names, vec!["path"]);
//! assert!(rest.pattern.is_match("/docs/a/b/c"));
//! assert!(rest.pattern.is_match("/docs"));
//! ```

use kit_typegen_core::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// A whole segment that is a rest parameter: `[...name]` or `[...name=matcher]`.
static REST_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[\.\.\.(\w+)(?:=(\w+))?\]$").expect("valid regex"));

/// A bracketed parameter anywhere inside a segment.
static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.+?)\]").expect("valid regex"));

/// Contents of a bracketed parameter.
static PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\.\.\.)?(\w+)(?:=(\w+))?$").expect("valid regex"));

/// Result of parsing a route id.
#[derive(Debug, Clone)]
pub struct ParsedRouteId {
    /// Parameter names in order of appearance
    pub names: Vec<String>,
    /// Matcher name for each parameter, parallel to `names`
    pub types: Vec<Option<String>>,
    /// Anchored pattern matching concrete request paths
    pub pattern: Regex,
}

impl ParsedRouteId {
    /// Matches a request path and returns the captured parameters.
    ///
    /// Rest parameters that matched nothing are returned as empty strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use kit_typegen_codegen::route_id::parse_route_id;
    ///
    /// let parsed = parse_route_id("[lang]/posts/[id=integer]").unwrap();
    /// let params = parsed.exec("/en/posts/42").unwrap();
    /// assert_eq!(params, vec![
    ///     ("lang".to_string(), "en".to_string()),
    ///     ("id".to_string(), "42".to_string()),
    /// ]);
    /// assert_eq!(parsed.types, vec![None, Some("integer".to_string())]);
    /// ```
    #[must_use]
    pub fn exec(&self, path: &str) -> Option<Vec<(String, String)>> {
        let captures = self.pattern.captures(path)?;
        Some(
            self.names
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    let value = captures.get(i + 1).map_or("", |m| m.as_str());
                    (name.clone(), value.to_string())
                })
                .collect(),
        )
    }
}

/// Accumulates names and the regex source while segments are visited.
#[derive(Default)]
struct PatternBuilder {
    source: String,
    names: Vec<String>,
    types: Vec<Option<String>>,
    trailing_slash: bool,
}

impl PatternBuilder {
    fn new() -> Self {
        Self {
            source: String::from("^"),
            trailing_slash: true,
            ..Self::default()
        }
    }

    fn with_param(&mut self, name: &str, matcher: Option<&str>) {
        self.names.push(name.to_string());
        self.types.push(matcher.map(str::to_string));
    }

    fn push_static(&mut self, text: &str, is_last: bool) {
        // A dot in the final segment means a file-like path: no optional slash.
        if is_last && text.contains('.') {
            self.trailing_slash = false;
        }
        self.source.push_str(&regex::escape(text));
    }

    fn push_segment(&mut self, id: &str, segment: &str, is_last: bool) -> Result<()> {
        if let Some(rest) = REST_SEGMENT.captures(segment) {
            self.with_param(&rest[1], rest.get(2).map(|m| m.as_str()));
            self.source.push_str("(?:/(.*))?");
            return Ok(());
        }

        if segment.is_empty() {
            return Ok(());
        }

        self.source.push('/');

        let mut cursor = 0;
        for bracketed in BRACKETED.find_iter(segment) {
            self.push_static(&segment[cursor..bracketed.start()], is_last);

            let inner = &segment[bracketed.start() + 1..bracketed.end() - 1];
            let param = PARAM.captures(inner).ok_or_else(|| Error::InvalidRouteId {
                id: id.to_string(),
                reason: format!("'[{inner}]' is not a valid parameter"),
            })?;

            self.with_param(&param[2], param.get(3).map(|m| m.as_str()));
            self.source.push_str(if param.get(1).is_some() {
                "(.*?)"
            } else {
                "([^/]+?)"
            });

            cursor = bracketed.end();
        }
        self.push_static(&segment[cursor..], is_last);

        Ok(())
    }

    fn finish(mut self, id: &str) -> Result<ParsedRouteId> {
        if self.trailing_slash {
            self.source.push_str("/?");
        }
        self.source.push('$');

        let pattern = Regex::new(&self.source).map_err(|e| Error::InvalidRouteId {
            id: id.to_string(),
            reason: e.to_string(),
        })?;

        Ok(ParsedRouteId {
            names: self.names,
            types: self.types,
            pattern,
        })
    }
}

/// Parses a route id into parameter names, matcher names, and a pattern.
///
/// The empty id is the root route and matches only `/`.
///
/// # Errors
///
/// Returns [`Error::InvalidRouteId`] if a bracketed segment does not hold a
/// valid parameter name (word characters, optional `...` prefix, optional
/// `=matcher` suffix).
pub fn parse_route_id(id: &str) -> Result<ParsedRouteId> {
    if id.is_empty() {
        return Ok(ParsedRouteId {
            names: Vec::new(),
            types: Vec::new(),
            pattern: Regex::new("^/$").expect("valid regex"),
        });
    }

    let segments: Vec<&str> = id.split('/').collect();
    let last = segments.len() - 1;

    let mut builder = PatternBuilder::new();
    for (i, segment) in segments.iter().enumerate() {
        builder.push_segment(id, segment, i == last)?;
    }

    builder.finish(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_route() {
        let parsed = parse_route_id("").unwrap();
        assert!(parsed.names.is_empty());
        assert!(parsed.pattern.is_match("/"));
        assert!(!parsed.pattern.is_match("/about"));
    }

    #[test]
    fn test_static_route_has_no_params() {
        let parsed = parse_route_id("api/posts").unwrap();
        assert!(parsed.names.is_empty());
        assert!(parsed.pattern.is_match("/api/posts"));
        assert!(parsed.pattern.is_match("/api/posts/"));
        assert!(!parsed.pattern.is_match("/api/posts/1"));
    }

    #[test]
    fn test_names_follow_order_of_appearance() {
        let parsed = parse_route_id("src/routes/[org]/repos/[repo]/[branch]").unwrap();
        assert_eq!(parsed.names, vec!["org", "repo", "branch"]);
    }

    #[test]
    fn test_multiple_params_in_one_segment() {
        let parsed = parse_route_id("files/[name]-[version].[ext]").unwrap();
        assert_eq!(parsed.names, vec!["name", "version", "ext"]);

        let params = parsed.exec("/files/kit-2.tgz").unwrap();
        assert_eq!(params[0].1, "kit");
        assert_eq!(params[1].1, "2");
        assert_eq!(params[2].1, "tgz");
    }

    #[test]
    fn test_dot_in_last_segment_disables_trailing_slash() {
        let parsed = parse_route_id("sitemap.xml").unwrap();
        assert!(parsed.pattern.is_match("/sitemap.xml"));
        assert!(!parsed.pattern.is_match("/sitemap.xml/"));
        assert!(!parsed.pattern.is_match("/sitemapxxml"));
    }

    #[test]
    fn test_rest_parameter_matches_zero_segments() {
        let parsed = parse_route_id("[...catchall]").unwrap();
        assert_eq!(parsed.names, vec!["catchall"]);

        let params = parsed.exec("/").unwrap();
        assert_eq!(params, vec![("catchall".to_string(), String::new())]);

        let params = parsed.exec("/a/b").unwrap();
        assert_eq!(params[0].1, "a/b");
    }

    #[test]
    fn test_rest_parameter_with_matcher() {
        let parsed = parse_route_id("docs/[...path=slugs]").unwrap();
        assert_eq!(parsed.types, vec![Some("slugs".to_string())]);
    }

    #[test]
    fn test_inline_rest_parameter() {
        let parsed = parse_route_id("assets/v[...rest]").unwrap();
        assert_eq!(parsed.names, vec!["rest"]);
        assert!(parsed.pattern.is_match("/assets/v1/2/3"));
    }

    #[test]
    fn test_invalid_parameter_is_rejected() {
        let err = parse_route_id("blog/[not-valid]").unwrap_err();
        assert!(matches!(err, Error::InvalidRouteId { .. }));
        assert!(err.to_string().contains("[not-valid]"));
    }

    #[test]
    fn test_static_text_is_escaped() {
        let parsed = parse_route_id("a+b/(group)").unwrap();
        assert!(parsed.pattern.is_match("/a+b/(group)"));
        assert!(!parsed.pattern.is_match("/aab/group"));
    }

    #[test]
    fn test_exec_returns_none_on_mismatch() {
        let parsed = parse_route_id("blog/[slug]").unwrap();
        assert!(parsed.exec("/news/hello").is_none());
    }
}
