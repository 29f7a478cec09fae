//! The pseudo-localization transform.
//!
//! Turns a source string into a longer, accented, bracketed variant that is still readable:
//! - every Latin letter is swapped for a look-alike from a fixed table,
//! - `{0}`-style placeholders and `<tag>`-style markup are copied verbatim,
//! - the result is wrapped in `[` `]` and padded with ` !!!` units to simulate text growth.
//!
//! Strings containing a link are returned untouched so the link keeps working.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Filler appended after the substituted text.
pub const PAD_UNIT: &str = " !!!";

/// Minimum number of [`PAD_UNIT`]s appended to any string.
pub const MIN_PAD_COUNT: usize = 2;

const PAD_UNIT_LEN: usize = 4;

/// Strings shorter than this grow by 400%, longer ones by 30%.
const SHORT_STRING_LIMIT: usize = 10;

const LINK_MARKERS: [&str; 2] = ["http://", "https://"];

lazy_static! {
    // Letters without a visually distinct variant (C, F, M, P, Q, V, X, m, p, q, v, y) are absent
    // and fall through unchanged.
    static ref SUBSTITUTIONS: HashMap<char, char> = [
        ('A', 'Å'),
        ('B', 'ß'),
        ('D', 'Đ'),
        ('E', 'Ē'),
        ('G', 'Ğ'),
        ('H', 'Ħ'),
        ('I', 'Ĩ'),
        ('J', 'Ĵ'),
        ('K', 'Ķ'),
        ('L', 'Ŀ'),
        ('N', 'Ń'),
        ('O', 'Ø'),
        ('R', 'Ŗ'),
        ('S', 'Ŝ'),
        ('T', 'Ŧ'),
        ('U', 'Ů'),
        ('W', 'Ŵ'),
        ('Y', 'Ÿ'),
        ('Z', 'Ż'),
        ('a', 'ä'),
        ('b', 'þ'),
        ('c', 'č'),
        ('d', 'đ'),
        ('e', 'ę'),
        ('f', 'ƒ'),
        ('g', 'ģ'),
        ('h', 'ĥ'),
        ('i', 'į'),
        ('j', 'ĵ'),
        ('k', 'ĸ'),
        ('l', 'ľ'),
        ('n', 'ŉ'),
        ('o', 'ő'),
        ('r', 'ř'),
        ('s', 'ş'),
        ('t', 'ŧ'),
        ('u', 'ū'),
        ('w', 'ŵ'),
        ('x', 'χ'),
        ('z', 'ž'),
    ]
    .into_iter()
    .collect();
}

/// Returns the look-alike for `c`, or `c` itself when the table has no entry.
pub fn substitute(c: char) -> char {
    SUBSTITUTIONS.get(&c).copied().unwrap_or(c)
}

/// True when `input` contains an `http://` or `https://` link anywhere.
pub fn is_link(input: &str) -> bool {
    LINK_MARKERS.iter().any(|marker| input.contains(marker))
}

/// The length a string of `len` UTF-16 units should grow to.
pub fn target_length(len: usize) -> usize {
    if len < SHORT_STRING_LIMIT {
        len + len * 4
    } else {
        len + (len as f64 * 0.3) as usize
    }
}

/// Number of [`PAD_UNIT`]s appended to a string of `len` UTF-16 units.
pub fn pad_count(len: usize) -> usize {
    // Two of the extra units are taken by the brackets.
    let room = target_length(len) as i64 - len as i64 - 2;
    let count = room / PAD_UNIT_LEN as i64;
    (count.max(MIN_PAD_COUNT as i64)) as usize
}

/// Pseudo-localizes one string.
///
/// Deterministic and total: every input maps to exactly one output.
///
/// # Example
///
/// ```rust
/// use pseudoloc::transform;
/// assert_eq!(transform("Save"), "[Ŝävę !!! !!! !!!]");
/// assert_eq!(transform(""), "[ !!! !!!]");
/// assert_eq!(transform("See https://example.com"), "See https://example.com");
/// ```
pub fn transform(input: &str) -> String {
    if is_link(input) {
        return input.to_string();
    }

    // Lengths are UTF-16 code units.
    let len = input.encode_utf16().count();
    let pads = pad_count(len);

    let mut out = String::with_capacity(input.len() * 2 + pads * PAD_UNIT_LEN + 2);
    out.push('[');

    let mut inside_brace = false;
    let mut inside_angle = false;
    for c in input.chars() {
        match c {
            '{' => inside_brace = true,
            '}' => inside_brace = false,
            '<' => inside_angle = true,
            '>' => inside_angle = false,
            _ => {}
        }
        // An unterminated `{` or `<` keeps the rest of the string verbatim.
        if inside_brace || inside_angle {
            out.push(c);
        } else {
            out.push(substitute(c));
        }
    }

    for _ in 0..pads {
        out.push_str(PAD_UNIT);
    }
    out.push(']');
    out
}
