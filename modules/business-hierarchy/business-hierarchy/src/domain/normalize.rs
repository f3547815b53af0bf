//! Input normalization applied before validation and persistence.

/// Keep only the ASCII digits of `raw`.
///
/// Used for tax ids so that `"12.345.678/0001-90"` and `"12345678000190"`
/// are the same value. Idempotent.
#[must_use]
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Trim free text; blank becomes absent.
#[must_use]
pub fn text(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Strip a tax id to digits; nothing left becomes absent.
#[must_use]
pub fn tax_id(raw: Option<&str>) -> Option<String> {
    raw.map(digits_only).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_from_organization_tax_id() {
        assert_eq!(digits_only("12.345.678/0001-90"), "12345678000190");
    }

    #[test]
    fn strips_punctuation_from_personal_tax_id() {
        assert_eq!(digits_only("123.456.789-01"), "12345678901");
    }

    #[test]
    fn digits_only_is_idempotent() {
        for raw in ["", "abc", "12.3-4", " 9 9 ", "0001", "a1b2c3", "\u{661}\u{662}\u{663}"] {
            let once = digits_only(raw);
            assert_eq!(digits_only(&once), once, "input {raw:?}");
        }
    }

    #[test]
    fn non_ascii_digits_are_dropped() {
        assert_eq!(digits_only("\u{661}\u{662}\u{663}45"), "45");
    }

    #[test]
    fn blank_text_is_absent() {
        assert_eq!(text(Some("   ")), None);
        assert_eq!(text(None), None);
        assert_eq!(text(Some("  Acme ")), Some("Acme".to_owned()));
    }

    #[test]
    fn tax_id_without_digits_is_absent() {
        assert_eq!(tax_id(Some("./-")), None);
        assert_eq!(tax_id(Some("1-2")), Some("12".to_owned()));
    }
}
