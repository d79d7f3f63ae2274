//! Five-glyph star rating.

/// One star position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StarGlyph {
    /// Filled star.
    Full,
    /// Half star.
    Half,
    /// Outline star.
    Empty,
}

impl StarGlyph {
    /// Glyph drawn for this position.
    pub fn symbol(self) -> &'static str {
        match self {
            StarGlyph::Full => "★",
            StarGlyph::Half => "⯪",
            StarGlyph::Empty => "☆",
        }
    }
}

/// Number of glyphs in every rating.
pub const STAR_COUNT: usize = 5;

/// Glyphs for a rating on the 0–5 scale.
///
/// `floor(r)` full stars, one half star if the fractional part is at least
/// 0.5, empty stars for the remainder. Out-of-range input is clamped and
/// non-finite input counts as 0, so the result is always five glyphs.
pub fn stars(rating: f64) -> [StarGlyph; STAR_COUNT] {
    let rating = if rating.is_finite() {
        rating.clamp(0.0, STAR_COUNT as f64)
    } else {
        0.0
    };
    let full = rating.floor() as usize;
    let half = full < STAR_COUNT && rating - rating.floor() >= 0.5;

    let mut glyphs = [StarGlyph::Empty; STAR_COUNT];
    for glyph in glyphs.iter_mut().take(full) {
        *glyph = StarGlyph::Full;
    }
    if half {
        glyphs[full] = StarGlyph::Half;
    }
    glyphs
}

/// Glyphs rendered as one string.
pub fn star_string(rating: f64) -> String {
    stars(rating).iter().map(|g| g.symbol()).collect()
}
