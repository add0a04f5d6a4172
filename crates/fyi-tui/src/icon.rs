//! Weather condition glyphs.
//!
//! Keyed by weatherapi.com condition codes. Codes not in the table get a
//! generic glyph, so every input has an icon.

/// Shown by day for conditions not in the table.
pub const UNKNOWN_DAY: &str = "🌈";

/// Shown by night for conditions not in the table.
pub const UNKNOWN_NIGHT: &str = "🌌";

/// Glyph for a provider condition code.
pub fn resolve(code: u32, is_daytime: bool) -> &'static str {
    match (code, is_daytime) {
        (1000, true) => "☀️",
        (1000, false) => "🌙",
        (1003, true) => "🌤️",
        (1003, false) => "☁️",
        (1006 | 1009, _) => "☁️",
        (1030, _) => "🌫️",
        (1063 | 1066 | 1069 | 1072, _) => "🌦️",
        (1087, _) => "⛈️",
        (1114 | 1117, _) => "❄️",
        (_, true) => UNKNOWN_DAY,
        (_, false) => UNKNOWN_NIGHT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_sky_day_and_night() {
        assert_eq!(resolve(1000, true), "☀️");
        assert_eq!(resolve(1000, false), "🌙");
    }

    #[test]
    fn test_partly_cloudy_differs_by_time_of_day() {
        assert_eq!(resolve(1003, true), "🌤️");
        assert_eq!(resolve(1003, false), "☁️");
    }

    #[test]
    fn test_shared_glyphs() {
        for is_day in [true, false] {
            assert_eq!(resolve(1006, is_day), "☁️");
            assert_eq!(resolve(1009, is_day), "☁️");
            assert_eq!(resolve(1030, is_day), "🌫️");
            for code in [1063, 1066, 1069, 1072] {
                assert_eq!(resolve(code, is_day), "🌦️");
            }
            assert_eq!(resolve(1087, is_day), "⛈️");
            assert_eq!(resolve(1114, is_day), "❄️");
            assert_eq!(resolve(1117, is_day), "❄️");
        }
    }

    #[test]
    fn test_unknown_codes_fall_back() {
        assert_eq!(resolve(1195, true), UNKNOWN_DAY);
        assert_eq!(resolve(1195, false), UNKNOWN_NIGHT);
        assert_eq!(resolve(0, true), UNKNOWN_DAY);
        assert_eq!(resolve(u32::MAX, false), UNKNOWN_NIGHT);
        assert_ne!(UNKNOWN_DAY, UNKNOWN_NIGHT);
    }

    #[test]
    fn test_every_code_has_a_glyph() {
        for code in 0..2000 {
            assert!(!resolve(code, true).is_empty());
            assert!(!resolve(code, false).is_empty());
        }
    }
}
