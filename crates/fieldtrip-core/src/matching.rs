//! Name normalization and cross-format name matching.
//!
//! The roster records names as "First Last" while trip attendee lists are
//! often exported as "Last, First 'YY" with a class-year marker. Everything
//! here is pure and total: a malformed name simply fails to match.

/// Strip a trailing class-year marker such as `'27` (with any surrounding
/// whitespace). Names without a marker are returned unchanged.
pub fn strip_class_year(name: &str) -> &str {
    let trimmed = name.trim_end();
    let bytes = trimmed.as_bytes();
    let len = bytes.len();

    let has_marker = len >= 3
        && bytes[len - 1].is_ascii_digit()
        && bytes[len - 2].is_ascii_digit()
        && bytes[len - 3] == b'\'';

    if has_marker {
        // The apostrophe is ASCII, so `len - 3` is a char boundary
        trimmed[..len - 3].trim_end()
    } else {
        name
    }
}

/// Canonical comparison form: class year stripped, trimmed, lowercased.
pub fn normalize_name(name: &str) -> String {
    strip_class_year(name).trim().to_lowercase()
}

/// A name decomposed into first and last components.
///
/// Components are stored case-folded, so two `Full` values compare equal
/// exactly when the names match ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedName {
    Full { first: String, last: String },
    /// Fewer than two usable components (single token, empty side of a comma)
    Unparseable,
}

impl ParsedName {
    /// Decompose a raw name.
    ///
    /// "Last, First" splits on the first comma; the first name runs to the
    /// next comma, so suffixes like "Smith, Jane, Jr" are dropped. Otherwise the first
    /// whitespace token is the first name and the last token is the last
    /// name; middle tokens are ignored.
    pub fn parse(raw: &str) -> Self {
        let name = strip_class_year(raw).trim();

        if let Some((last, rest)) = name.split_once(',') {
            let first = rest.split(',').next().unwrap_or_default();
            let first = strip_class_year(first).trim();
            let last = strip_class_year(last).trim();
            if first.is_empty() || last.is_empty() {
                return ParsedName::Unparseable;
            }
            return ParsedName::full(first, last);
        }

        let mut tokens = name.split_whitespace();
        match (tokens.next(), tokens.last()) {
            (Some(first), Some(last)) => ParsedName::full(first, last),
            _ => ParsedName::Unparseable,
        }
    }

    fn full(first: &str, last: &str) -> Self {
        ParsedName::Full {
            first: first.to_lowercase(),
            last: last.to_lowercase(),
        }
    }
}

/// Decide whether two raw name strings denote the same person.
///
/// Symmetric: `names_match(a, b) == names_match(b, a)` for all inputs.
pub fn names_match(a: &str, b: &str) -> bool {
    if normalize_name(a) == normalize_name(b) {
        return true;
    }

    match (ParsedName::parse(a), ParsedName::parse(b)) {
        (
            ParsedName::Full { first: first_a, last: last_a },
            ParsedName::Full { first: first_b, last: last_b },
        ) => first_a == first_b && last_a == last_b,
        _ => false,
    }
}
