pub const UNKNOWN_COUNTRY: &str = "Unknown";
pub const DOMESTIC_COUNTRY: &str = "China";
pub const DOMESTIC_PREFIX: &str = "+86";
const DOMESTIC_MOBILE_DIGITS: usize = 11;

/// International dialing prefixes and the country or region they belong to.
pub const COUNTRY_CODES: &[(&str, &str)] = &[
    ("+86", "China"),
    ("+1", "US/Canada"),
    ("+44", "United Kingdom"),
    ("+49", "Germany"),
    ("+33", "France"),
    ("+39", "Italy"),
    ("+81", "Japan"),
    ("+82", "South Korea"),
    ("+61", "Australia"),
    ("+91", "India"),
    ("+7", "Russia"),
    ("+65", "Singapore"),
    ("+47", "Norway"),
    ("+46", "Sweden"),
    ("+45", "Denmark"),
    ("+31", "Netherlands"),
    ("+43", "Austria"),
    ("+34", "Spain"),
    ("+41", "Switzerland"),
    ("+64", "New Zealand"),
    ("+27", "South Africa"),
    ("+55", "Brazil"),
    ("+52", "Mexico"),
    ("+886", "Taiwan (China)"),
    ("+852", "Hong Kong (China)"),
    ("+853", "Macau (China)"),
];

/// Longest dialing prefix from [`COUNTRY_CODES`] that `phone` starts with.
pub fn match_dialing_code(phone: &str) -> Option<(&'static str, &'static str)> {
    COUNTRY_CODES
        .iter()
        .filter(|(code, _)| phone.starts_with(code))
        .max_by_key(|(code, _)| code.len())
        .copied()
}

pub fn country_for_phone(phone: &str) -> &'static str {
    if let Some((_, country)) = match_dialing_code(phone) {
        return country;
    }
    if is_domestic_mobile(phone) {
        return DOMESTIC_COUNTRY;
    }
    UNKNOWN_COUNTRY
}

/// Display form: a space after a known prefix, or `+86 ` in front of a bare
/// domestic mobile number. Anything else is returned as is.
pub fn format_phone(phone: &str) -> String {
    if let Some((code, _)) = match_dialing_code(phone) {
        return format!("{} {}", code, &phone[code.len()..]);
    }
    if is_domestic_mobile(phone) {
        return format!("{} {}", DOMESTIC_PREFIX, phone);
    }
    phone.to_string()
}

/// Canonical key used to decide whether two phone strings name the same line.
///
/// Spaces and hyphens are dropped and a bare domestic mobile number gains the
/// `+86` prefix, so `13800138000`, `+86 138-0013-8000` and `+8613800138000`
/// share a key.
pub fn phone_key(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut out = String::with_capacity(trimmed.len() + DOMESTIC_PREFIX.len());
    if trimmed.starts_with('+') {
        out.push('+');
    }

    let mut saw_digit = false;
    for ch in trimmed.chars() {
        if ch.is_ascii_digit() {
            out.push(ch);
            saw_digit = true;
        }
    }

    if !saw_digit {
        return None;
    }

    if is_domestic_mobile(&out) {
        out.insert_str(0, DOMESTIC_PREFIX);
    }
    Some(out)
}

fn is_domestic_mobile(phone: &str) -> bool {
    phone.len() == DOMESTIC_MOBILE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_uses_dialing_prefix() {
        assert_eq!(country_for_phone("+8613800138000"), "China");
        assert_eq!(country_for_phone("+14155551212"), "US/Canada");
        assert_eq!(country_for_phone("+442071838750"), "United Kingdom");
        assert_eq!(country_for_phone("+74951234567"), "Russia");
    }

    #[test]
    fn country_prefers_longest_prefix() {
        assert_eq!(country_for_phone("+85291234567"), "Hong Kong (China)");
        assert_eq!(country_for_phone("+886912345678"), "Taiwan (China)");
    }

    #[test]
    fn country_defaults_for_domestic_mobile() {
        assert_eq!(country_for_phone("13800138000"), "China");
    }

    #[test]
    fn country_unknown_otherwise() {
        assert_eq!(country_for_phone("010-12345678"), "Unknown");
        assert_eq!(country_for_phone("1380013800"), "Unknown");
        assert_eq!(country_for_phone("+99912345678"), "Unknown");
        assert_eq!(country_for_phone("138 0013 8000"), "Unknown");
    }

    #[test]
    fn format_inserts_space_after_prefix() {
        assert_eq!(format_phone("+8613800138000"), "+86 13800138000");
        assert_eq!(format_phone("+85291234567"), "+852 91234567");
    }

    #[test]
    fn format_prefixes_domestic_mobile() {
        assert_eq!(format_phone("13800138000"), "+86 13800138000");
    }

    #[test]
    fn format_leaves_other_values() {
        assert_eq!(format_phone("abc"), "abc");
        assert_eq!(format_phone("010-12345678"), "010-12345678");
    }

    #[test]
    fn phone_key_strips_formatting() {
        assert_eq!(phone_key(" 021-123 4567 ").as_deref(), Some("0211234567"));
        assert_eq!(
            phone_key("+1 415-555-1212").as_deref(),
            Some("+14155551212")
        );
    }

    #[test]
    fn phone_key_treats_domestic_mobile_as_plus_86() {
        let bare = phone_key("13800138000");
        assert_eq!(bare.as_deref(), Some("+8613800138000"));
        assert_eq!(phone_key("+86 138-0013-8000"), bare);
        assert_eq!(phone_key("138 0013 8000"), bare);
    }

    #[test]
    fn phone_key_rejects_values_without_digits() {
        assert!(phone_key("   ").is_none());
        assert!(phone_key("+-").is_none());
    }
}
