//! Street grammar: directional prefix, street body, suffix token.
//!
//! A street is a single `N`, `S`, `E` or `W` followed by whitespace, then a
//! run of word characters and whitespace that ends in one of the
//! [`SUFFIXES`]. The suffix is not word-bounded, so `STE` still yields an
//! `ST` ending. Whitespace includes the byte-order mark.

use super::is_space;

/// Street type tokens, matched case-insensitively.
pub const SUFFIXES: [&str; 9] = ["ST", "AV", "DR", "PL", "CT", "BL", "RD", "WY", "LN"];

const DIRECTIONS: [char; 4] = ['N', 'S', 'E', 'W'];

/// Shortest possible match: direction, one whitespace, one body char, suffix.
const MIN_MATCH_CHARS: usize = 5;

/// Returns the leftmost street match in `location`, uppercased and trimmed.
///
/// For a given starting direction the longest qualifying run wins.
pub fn match_street(location: &str) -> Option<String> {
    let chars: Vec<char> = location.chars().collect();

    (0..chars.len())
        .find_map(|start| match_at(&chars, start))
        .map(|matched| matched.to_uppercase().trim_matches(is_space).to_string())
}

fn match_at(chars: &[char], start: usize) -> Option<String> {
    if !DIRECTIONS.contains(&chars[start].to_ascii_uppercase()) {
        return None;
    }
    if !chars.get(start + 1).is_some_and(|&c| is_space(c)) {
        return None;
    }

    let run_end = chars[start + 1..]
        .iter()
        .position(|&c| !is_body_char(c))
        .map_or(chars.len(), |offset| start + 1 + offset);

    (start + MIN_MATCH_CHARS..=run_end)
        .rev()
        .find(|&end| ends_with_suffix(&chars[end - 2..end]))
        .map(|end| chars[start..end].iter().collect())
}

fn is_body_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || is_space(c)
}

fn ends_with_suffix(tail: &[char]) -> bool {
    SUFFIXES.iter().any(|suffix| {
        suffix
            .chars()
            .zip(tail)
            .all(|(want, got)| got.eq_ignore_ascii_case(&want))
    })
}
