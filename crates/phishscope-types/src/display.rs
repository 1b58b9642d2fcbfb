//! Presentation helpers shared by renderers.
//!
//! Normalized values stay unrounded and lower-cased; these functions apply the
//! display-time conventions (two-decimal scores, capitalized emotion names) so
//! every consumer formats them the same way.

/// Format a raw score with two decimals, e.g. `0.8` -> `"0.80"`.
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

/// Capitalize an emotion label for display, e.g. `"fear"` -> `"Fear"`.
pub fn display_emotion(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_score_two_decimals() {
        assert_eq!(format_score(0.8), "0.80");
        assert_eq!(format_score(0.923), "0.92");
        assert_eq!(format_score(1.0), "1.00");
    }

    #[test]
    fn test_display_emotion_capitalizes_first_letter() {
        assert_eq!(display_emotion("fear"), "Fear");
        assert_eq!(display_emotion("joy"), "Joy");
        assert_eq!(display_emotion(""), "");
    }
}
