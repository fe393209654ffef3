//! Word splitting and case conversion for generated names.
//!
//! Output paths use kebab-case segments; emitted callables use camelCase.
//! Both derive from the same word split so that `IdentityUser`,
//! `identity_user` and `identity-user` all agree.
//!
//! ## Splitting Rules
//!
//! - Any non-alphanumeric character separates words: `"user.profile"` -> `["user", "profile"]`
//! - Uppercase after lowercase or a digit starts a word: `"IdentityUser"` -> `["Identity", "User"]`
//! - An acronym ends before its last capital when a lowercase follows:
//!   `"HTTPClient"` -> `["HTTP", "Client"]`

use std::collections::HashSet;

/// Splits a name into words.
///
/// ## Examples
///
/// ```
/// use proxygen_gen::naming::split_words;
///
/// assert_eq!(split_words("IdentityUser"), vec!["Identity", "User"]);
/// assert_eq!(split_words("HTTPClient"), vec!["HTTP", "Client"]);
/// assert_eq!(split_words("audit_log-entry"), vec!["audit", "log", "entry"]);
/// ```
pub fn split_words(s: &str) -> Vec<&str> {
    let mut words = Vec::new();

    for part in s.split(|c: char| !c.is_alphanumeric()) {
        if part.is_empty() {
            continue;
        }

        let chars: Vec<(usize, char)> = part.char_indices().collect();
        let mut word_start = 0;

        for i in 1..chars.len() {
            let (offset, current) = chars[i];
            let prev = chars[i - 1].1;
            let next_is_lower = chars.get(i + 1).is_some_and(|(_, c)| c.is_lowercase());

            let is_new_word = current.is_uppercase()
                && (prev.is_lowercase()
                    || prev.is_numeric()
                    || (prev.is_uppercase() && next_is_lower));

            if is_new_word {
                words.push(&part[word_start..offset]);
                word_start = offset;
            }
        }

        words.push(&part[word_start..]);
    }

    words
}

/// Converts a name to kebab-case for use as a path segment.
///
/// ## Examples
///
/// ```
/// use proxygen_gen::naming::to_kebab_case;
///
/// assert_eq!(to_kebab_case("IdentityUser"), "identity-user");
/// assert_eq!(to_kebab_case("app"), "app");
/// assert_eq!(to_kebab_case("OAuth2Client"), "o-auth2-client");
/// assert_eq!(to_kebab_case("  "), "");
/// ```
pub fn to_kebab_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Converts a name to camelCase.
///
/// ## Examples
///
/// ```
/// use proxygen_gen::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("GetList"), "getList");
/// assert_eq!(to_camel_case("get_by_id"), "getById");
/// assert_eq!(to_camel_case("URLTemplate"), "urlTemplate");
/// ```
pub fn to_camel_case(s: &str) -> String {
    split_words(s)
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i == 0 {
                word.to_lowercase()
            } else {
                capitalize(word)
            }
        })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Returns `name`, or `name` with the smallest numeric suffix not yet used,
/// and marks the result as used.
///
/// ## Examples
///
/// ```
/// use std::collections::HashSet;
/// use proxygen_gen::naming::unique_name;
///
/// let mut seen = HashSet::new();
/// assert_eq!(unique_name(&mut seen, "getList"), "getList");
/// assert_eq!(unique_name(&mut seen, "getList"), "getList2");
/// assert_eq!(unique_name(&mut seen, "getList"), "getList3");
/// ```
pub fn unique_name(seen: &mut HashSet<String>, name: &str) -> String {
    if seen.insert(name.to_string()) {
        return name.to_string();
    }
    let mut counter = 2;
    loop {
        let candidate = format!("{name}{counter}");
        if seen.insert(candidate.clone()) {
            return candidate;
        }
        counter += 1;
    }
}
