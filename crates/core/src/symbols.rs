//! Math and special-character substitution.
//!
//! Rewrites plain-keyboard notation into display glyphs:
//!
//! - `x^2`, `x^10`, `e^x` become superscripts, `H_2O`, `x_i` subscripts
//! - `>=`, `<=`, `!=`, `~=` become `≥`, `≤`, `≠`, `≈`
//! - the whole words `alpha`, `beta`, `gamma`, `delta`, `theta`, `sigma`,
//!   `pi` become Greek letters
//!
//! A letter after `^` or `_` is only converted when it ends the word, so
//! identifiers such as `file_name` are left alone. Running [`substitute`] on
//! its own output changes nothing, and [`restore`] maps glyphs back.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static GREEK_WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(alpha|beta|gamma|delta|theta|sigma|pi)\b").unwrap()
});

const SUPERSCRIPTS: &[(char, char)] = &[
    ('0', '⁰'), ('1', '¹'), ('2', '²'), ('3', '³'), ('4', '⁴'),
    ('5', '⁵'), ('6', '⁶'), ('7', '⁷'), ('8', '⁸'), ('9', '⁹'),
    ('a', 'ᵃ'), ('b', 'ᵇ'), ('c', 'ᶜ'), ('d', 'ᵈ'), ('e', 'ᵉ'),
    ('f', 'ᶠ'), ('g', 'ᵍ'), ('h', 'ʰ'), ('i', 'ⁱ'), ('j', 'ʲ'),
    ('k', 'ᵏ'), ('l', 'ˡ'), ('m', 'ᵐ'), ('n', 'ⁿ'), ('o', 'ᵒ'),
    ('p', 'ᵖ'), ('r', 'ʳ'), ('s', 'ˢ'), ('t', 'ᵗ'), ('u', 'ᵘ'),
    ('v', 'ᵛ'), ('w', 'ʷ'), ('x', 'ˣ'), ('y', 'ʸ'), ('z', 'ᶻ'),
];

const SUBSCRIPTS: &[(char, char)] = &[
    ('0', '₀'), ('1', '₁'), ('2', '₂'), ('3', '₃'), ('4', '₄'),
    ('5', '₅'), ('6', '₆'), ('7', '₇'), ('8', '₈'), ('9', '₉'),
    ('a', 'ₐ'), ('e', 'ₑ'), ('h', 'ₕ'), ('i', 'ᵢ'), ('j', 'ⱼ'),
    ('k', 'ₖ'), ('l', 'ₗ'), ('m', 'ₘ'), ('n', 'ₙ'), ('o', 'ₒ'),
    ('p', 'ₚ'), ('r', 'ᵣ'), ('s', 'ₛ'), ('t', 'ₜ'), ('u', 'ᵤ'),
    ('v', 'ᵥ'), ('x', 'ₓ'),
];

const OPERATORS: &[(&str, char)] = &[(">=", '≥'), ("<=", '≤'), ("!=", '≠'), ("~=", '≈')];

const GREEK: &[(&str, char)] = &[
    ("alpha", 'α'),
    ("beta", 'β'),
    ("gamma", 'γ'),
    ("delta", 'δ'),
    ("theta", 'θ'),
    ("sigma", 'σ'),
    ("pi", 'π'),
];

/// Glyph for `c` in `table`.
fn glyph(c: char, table: &[(char, char)]) -> Option<char> {
    table.iter().find(|(s, _)| *s == c).map(|(_, g)| *g)
}

/// Replace `marker` plus a digit run, or `marker` plus one word-final
/// letter, with glyphs from `table`.
///
/// Any alphanumeric character (glyphs included) or `_` continues a word.
fn convert_scripts(text: &str, marker: char, table: &[(char, char)]) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut output = String::with_capacity(text.len());
    let continues_word = |i: usize| chars.get(i).is_some_and(|c| c.is_alphanumeric() || *c == '_');

    let mut i = 0;
    while i < chars.len() {
        if chars[i] == marker {
            let digits = chars[i + 1..]
                .iter()
                .take_while(|c| c.is_ascii_digit())
                .count();
            if digits > 0 {
                output.extend(chars[i + 1..=i + digits].iter().filter_map(|c| glyph(*c, table)));
                i += 1 + digits;
                continue;
            }
            if let Some(&letter) = chars.get(i + 1) {
                if letter.is_ascii_lowercase() && !continues_word(i + 2) {
                    if let Some(g) = glyph(letter, table) {
                        output.push(g);
                        i += 2;
                        continue;
                    }
                }
            }
        }
        output.push(chars[i]);
        i += 1;
    }

    output
}

/// Replace math notation in `text` with display glyphs.
pub fn substitute(text: &str) -> String {
    let text = convert_scripts(text, '_', SUBSCRIPTS);
    let mut text = convert_scripts(&text, '^', SUPERSCRIPTS);

    for (token, glyph) in OPERATORS {
        if text.contains(token) {
            text = text.replace(token, &glyph.to_string());
        }
    }

    GREEK_WORD_REGEX
        .replace_all(&text, |caps: &Captures| {
            GREEK
                .iter()
                .find(|(word, _)| *word == &caps[1])
                .map(|(_, glyph)| glyph.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Turn display glyphs back into their source notation.
///
/// Consecutive superscript (or subscript) glyphs share a single marker, so
/// `x¹⁰` restores to `x^10`.
pub fn restore(text: &str) -> String {
    #[derive(PartialEq)]
    enum Run {
        None,
        Super,
        Sub,
    }

    let mut output = String::with_capacity(text.len());
    let mut run = Run::None;

    for c in text.chars() {
        if let Some((source, _)) = SUPERSCRIPTS.iter().find(|(_, g)| *g == c) {
            if run != Run::Super {
                output.push('^');
                run = Run::Super;
            }
            output.push(*source);
        } else if let Some((source, _)) = SUBSCRIPTS.iter().find(|(_, g)| *g == c) {
            if run != Run::Sub {
                output.push('_');
                run = Run::Sub;
            }
            output.push(*source);
        } else {
            run = Run::None;
            if let Some((token, _)) = OPERATORS.iter().find(|(_, g)| *g == c) {
                output.push_str(token);
            } else if let Some((word, _)) = GREEK.iter().find(|(_, g)| *g == c) {
                output.push_str(word);
            } else {
                output.push(c);
            }
        }
    }

    output
}
