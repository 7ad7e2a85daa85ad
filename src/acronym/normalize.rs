//! Acronym key normalization.

/// Canonicalize an acronym spelling.
///
/// Dots and spaces are removed, the result is uppercased, and any leading or
/// trailing non-alphanumeric characters are stripped. Two spellings denote
/// the same acronym iff they normalize identically.
///
/// # Example
///
/// ```
/// use reqlint::acronym::normalize;
///
/// assert_eq!(normalize("U.S.A."), "USA");
/// assert_eq!(normalize("U S A"), "USA");
/// assert_eq!(normalize("(api)"), "API");
/// ```
pub fn normalize(token: &str) -> String {
    let upper: String = token
        .chars()
        .filter(|&c| c != '.' && c != ' ')
        .collect::<String>()
        .to_uppercase();

    upper
        .trim_matches(|c: char| !c.is_ascii_alphanumeric())
        .to_string()
}

/// Check if a normalized key is purely alphabetic with a length in `range`.
pub fn is_acronym_key(key: &str, range: std::ops::RangeInclusive<usize>) -> bool {
    range.contains(&key.chars().count()) && key.chars().all(|c| c.is_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotted_and_spaced_collapse() {
        assert_eq!(normalize("U.S.A."), "USA");
        assert_eq!(normalize("U S A"), "USA");
        assert_eq!(normalize("usa"), "USA");
        assert_eq!(normalize("U.S.A."), normalize("U S A"));
    }

    #[test]
    fn test_strips_edges_not_inner() {
        assert_eq!(normalize("-GUI-"), "GUI");
        assert_eq!(normalize("(HTTP)"), "HTTP");
        assert_eq!(normalize("Wi-Fi"), "WI-FI");
        assert_eq!(normalize("..."), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "U.S.A.",
            " e.g. ",
            "(TCP/IP)",
            "ŉot",
            "Wi-Fi",
            "straße",
            "--x--",
            "",
            "A.B.C.D.E.F.G",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_is_acronym_key() {
        assert!(is_acronym_key("GUI", 2..=6));
        assert!(!is_acronym_key("G", 2..=6));
        assert!(!is_acronym_key("MP3", 2..=10));
        assert!(!is_acronym_key("WI-FI", 2..=10));
        assert!(!is_acronym_key("ABCDEFG", 2..=6));
    }
}
