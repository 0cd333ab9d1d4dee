//! Font-size policy: longer text gets a smaller point size.

/// Size used below the first threshold.
pub const DEFAULT_FONT_SIZE: u32 = 22;

/// `(minimum length in characters, point size)`, longest first.
const FONT_SIZE_STEPS: [(usize, u32); 3] = [(700, 14), (500, 16), (300, 18)];

/// Point size for a block of `len` characters.
pub fn font_size_for_len(len: usize) -> u32 {
    FONT_SIZE_STEPS
        .iter()
        .find(|(min_len, _)| len >= *min_len)
        .map(|(_, size)| *size)
        .unwrap_or(DEFAULT_FONT_SIZE)
}

/// Point size for a piece of display text.
pub fn font_size_for(text: &str) -> u32 {
    font_size_for_len(text.chars().count())
}
