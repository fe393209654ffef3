//! URL template parsing.
//!
//! Action URL templates use route-template placeholders:
//!
//! - `{id}` - plain placeholder
//! - `{id:int}` - placeholder with a route constraint (ignored)
//! - `{id?}` - optional placeholder
//! - `{*path}` - catch-all placeholder
//!
//! Unbalanced or empty braces are kept as literal text.

/// One piece of a parsed URL template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlSegment<'a> {
    /// Text copied into the URL unchanged.
    Literal(&'a str),
    /// A `{placeholder}` filled from a path parameter.
    Placeholder {
        /// Placeholder name without constraint, `?` or `*` markers.
        name: &'a str,
        /// Whether the template marks the placeholder optional.
        optional: bool,
    },
}

/// Splits a URL template into literal and placeholder segments.
///
/// ## Examples
///
/// ```
/// use proxygen_gen::parser::{parse_url_template, UrlSegment};
///
/// assert_eq!(
///     parse_url_template("/api/app/user/{id:int}"),
///     vec![
///         UrlSegment::Literal("/api/app/user/"),
///         UrlSegment::Placeholder { name: "id", optional: false },
///     ]
/// );
/// ```
pub fn parse_url_template(template: &str) -> Vec<UrlSegment<'_>> {
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut open: Option<usize> = None;

    for (idx, c) in template.char_indices() {
        match c {
            '{' => open = Some(idx),
            '}' => {
                let Some(start) = open.take() else {
                    continue;
                };
                let Some((name, optional)) = parse_placeholder(&template[start + 1..idx]) else {
                    continue;
                };
                if start > literal_start {
                    segments.push(UrlSegment::Literal(&template[literal_start..start]));
                }
                segments.push(UrlSegment::Placeholder { name, optional });
                literal_start = idx + 1;
            }
            _ => {}
        }
    }

    if literal_start < template.len() {
        segments.push(UrlSegment::Literal(&template[literal_start..]));
    }

    segments
}

fn parse_placeholder(inner: &str) -> Option<(&str, bool)> {
    let inner = inner.trim();
    let (inner, optional) = match inner.strip_suffix('?') {
        Some(rest) => (rest, true),
        None => (inner, false),
    };
    let name = inner.split(':').next().unwrap_or_default();
    let name = name.trim_start_matches('*').trim();

    if name.is_empty() {
        None
    } else {
        Some((name, optional))
    }
}
