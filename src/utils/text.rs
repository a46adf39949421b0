// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Text transforms for display labels, slugs, and previews.
//!
//! `None` stands in for an absent value; helpers that map absence to absence
//! return `Option<String>`.

/// Default cut-off for [`get_truncate_description`].
pub const DEFAULT_TRUNCATE_LENGTH: usize = 10;
/// Default separator for [`slugify`].
pub const DEFAULT_SLUG_SEPARATOR: &str = "-";

const ELLIPSIS: &str = "...";

/// Uppercase the first character and keep the rest unchanged.
///
/// Blank input yields an empty string; absent input stays absent.
pub fn capitalize_first_letter(value: Option<&str>) -> Option<String> {
    let value = value?;
    if value.trim().is_empty() {
        return Some(String::new());
    }
    Some(upper_first(value))
}

/// Turn `snake_case` or spaced words into `Title Case`.
///
/// Underscores become spaces and the first letter of every space-delimited
/// word is uppercased. Runs of spaces are preserved as-is.
pub fn title_case(value: Option<&str>) -> Option<String> {
    let value = value.filter(|v| !v.is_empty())?;
    Some(
        value
            .replace('_', " ")
            .split(' ')
            .map(upper_first)
            .collect::<Vec<_>>()
            .join(" "),
    )
}

/// Initials for an avatar badge: first and last word initial, uppercased.
///
/// Returns `"?"` when there is no usable name.
pub fn get_initials(name: Option<&str>) -> String {
    let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) else {
        return "?".to_string();
    };

    let initials: Vec<char> = name
        .split(' ')
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    match initials.as_slice() {
        [] => "?".to_string(),
        [only] => only.to_string(),
        [first, .., last] => format!("{first}{last}"),
    }
}

/// Shorten `text` to `max_length` characters followed by `...`.
///
/// Text that already fits is returned unchanged; absent or empty text yields `""`.
pub fn get_truncate_description(text: Option<&str>, max_length: usize) -> String {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return String::new();
    };

    match text.char_indices().nth(max_length) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}

/// Produce a lowercase, URL-friendly slug.
///
/// # Steps
/// - Lowercase and trim; blank input yields `""`.
/// - Whitespace runs become `separator`.
/// - Keep ASCII alphanumerics and `-`; `_` becomes `separator`; drop everything else.
/// - Collapse repeated separators and `-` runs into one `separator`.
/// - Strip one trailing `-`, then one trailing `separator`.
pub fn slugify(value: &str, separator: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let lowered = trimmed.to_lowercase();
    let mut raw = String::with_capacity(lowered.len());
    for (idx, word) in lowered.split_whitespace().enumerate() {
        if idx > 0 {
            raw.push_str(separator);
        }
        for ch in word.chars() {
            match ch {
                '_' => raw.push_str(separator),
                c if c.is_ascii_alphanumeric() || c == '-' => raw.push(c),
                _ => {}
            }
        }
    }

    let mut out = collapse_separators(&raw, separator);
    if out.ends_with('-') {
        out.pop();
    }
    if !separator.is_empty() && out.ends_with(separator) {
        out.truncate(out.len() - separator.len());
    }
    out
}

/// Reverse the characters of `value`; absent or empty input yields `None`.
pub fn reverse_string(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.is_empty())
        .map(|v| v.chars().rev().collect())
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn collapse_separators(raw: &str, separator: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(ch) = rest.chars().next() {
        if !separator.is_empty() && rest.starts_with(separator) {
            while rest.starts_with(separator) {
                rest = &rest[separator.len()..];
            }
            out.push_str(separator);
        } else if rest.starts_with("--") {
            rest = rest.trim_start_matches('-');
            out.push_str(separator);
        } else {
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // Absent stays absent, blank collapses to empty, otherwise only the first letter changes.
    #[test]
    fn capitalize_first_letter_cases() {
        assert_eq!(capitalize_first_letter(None), None);
        assert_eq!(capitalize_first_letter(Some("")), Some(String::new()));
        assert_eq!(capitalize_first_letter(Some("   ")), Some(String::new()));
        assert_eq!(capitalize_first_letter(Some("abc")), Some("Abc".into()));
        assert_eq!(capitalize_first_letter(Some("éclair bar")), Some("Éclair bar".into()));
    }

    // Underscores split words and every word gets a capital.
    #[test]
    fn title_case_handles_snake_case() {
        assert_eq!(title_case(None), None);
        assert_eq!(title_case(Some("")), None);
        assert_eq!(title_case(Some("first_name")), Some("First Name".into()));
        assert_eq!(title_case(Some("hello  big world")), Some("Hello  Big World".into()));
    }

    // Initials keep only the first and last word.
    #[test]
    fn initials_use_first_and_last_word() {
        assert_eq!(get_initials(None), "?");
        assert_eq!(get_initials(Some("")), "?");
        assert_eq!(get_initials(Some("   ")), "?");
        assert_eq!(get_initials(Some("John")), "J");
        assert_eq!(get_initials(Some("John Doe")), "JD");
        assert_eq!(get_initials(Some("  ada   king lovelace ")), "AL");
    }

    // Truncation counts characters and appends a literal ellipsis.
    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(get_truncate_description(None, 5), "");
        assert_eq!(get_truncate_description(Some(""), 5), "");
        assert_eq!(get_truncate_description(Some("hello world"), 5), "hello...");
        assert_eq!(get_truncate_description(Some("hello"), 5), "hello");
        assert_eq!(
            get_truncate_description(Some("short text"), DEFAULT_TRUNCATE_LENGTH),
            "short text"
        );
        assert_eq!(get_truncate_description(Some("größer als"), 3), "grö...");
    }

    // Punctuation is dropped and whitespace becomes the separator.
    #[test]
    fn slugify_basic() {
        assert_eq!(slugify("Hello World!", DEFAULT_SLUG_SEPARATOR), "hello-world");
        assert_eq!(slugify("   ", DEFAULT_SLUG_SEPARATOR), "");
        assert_eq!(slugify("  Trim   me  ", DEFAULT_SLUG_SEPARATOR), "trim-me");
    }

    // Separator runs collapse and a trailing separator is removed.
    #[test]
    fn slugify_collapses_and_strips_trailing() {
        assert_eq!(slugify("hello - world", "-"), "hello-world");
        assert_eq!(slugify("a ! b", "-"), "a-b");
        assert_eq!(slugify("snake_case_name", "-"), "snake-case-name");
        assert_eq!(slugify("ends with -", "-"), "ends-with");
        assert_eq!(slugify("-leading", "-"), "-leading");
    }

    // Custom separators replace whitespace and underscores.
    #[test]
    fn slugify_custom_separator() {
        assert_eq!(slugify("Hello Big World", "_"), "hello_big_world");
        assert_eq!(slugify("a  b__c", "_"), "a_b_c");
        assert_eq!(slugify("Café au lait", "-"), "caf-au-lait");
        // A dangling hyphen goes even when it is not the separator.
        assert_eq!(slugify("hello world -", "_"), "hello_world");
        assert_eq!(slugify("trailing-", "_"), "trailing");
    }

    // Reversal works on characters, not bytes.
    #[test]
    fn reverse_string_cases() {
        assert_eq!(reverse_string(None), None);
        assert_eq!(reverse_string(Some("")), None);
        assert_eq!(reverse_string(Some("abc")), Some("cba".into()));
        assert_eq!(reverse_string(Some("añb")), Some("bña".into()));
    }
}
