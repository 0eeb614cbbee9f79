//! Deterministic display attributes derived from a course acronym.

use serde::Serialize;

/// HSL color strings for one course, stable across runs for the same acronym.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

/// Derives a color theme from an acronym.
///
/// The hue comes from the classic `acc * 31 + c` string hash computed with
/// 32-bit signed wraparound. The wraparound is load-bearing: callers rely on
/// identical acronyms mapping to identical hues across implementations, so
/// the accumulator must not widen past 32 bits.
pub fn course_colors(acronym: &str) -> CourseColors {
    let hash = acronym.chars().fold(0i32, |acc, c| {
        (c as i32).wrapping_add(acc.wrapping_shl(5).wrapping_sub(acc))
    });
    let hue = hash.unsigned_abs() % 360;
    CourseColors {
        primary: format!("hsl({hue}, 70%, 50%)"),
        secondary: format!("hsl({hue}, 70%, 80%)"),
        accent: format!("hsl({}, 70%, 50%)", (hue + 180) % 360),
    }
}

/// Maps an acronym to its display emoji. Lookup is exact-match: a
/// case-mismatch falls through to the book glyph like any unknown acronym.
pub fn course_emoji(acronym: &str) -> &'static str {
    match acronym {
        "CS" => "💻",
        "SE" => "🛠️",
        "BIT" => "📊",
        "CIT" => "🌐",
        "DS" => "📈",
        "CE" => "⚙️",
        _ => "📚",
    }
}
