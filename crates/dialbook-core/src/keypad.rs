/// Digit for an ASCII letter on a standard telephone keypad.
pub fn keypad_digit(ch: char) -> Option<char> {
    let digit = match ch.to_ascii_lowercase() {
        'a' | 'b' | 'c' => '2',
        'd' | 'e' | 'f' => '3',
        'g' | 'h' | 'i' => '4',
        'j' | 'k' | 'l' => '5',
        'm' | 'n' | 'o' => '6',
        'p' | 'q' | 'r' | 's' => '7',
        't' | 'u' | 'v' => '8',
        'w' | 'x' | 'y' | 'z' => '9',
        _ => return None,
    };
    Some(digit)
}

/// Transliterates `text` into keypad digits. Characters without a key
/// (digits, punctuation, whitespace, CJK) contribute nothing, so different
/// names may share a code.
pub fn keypad_code(text: &str) -> String {
    text.chars().filter_map(keypad_digit).collect()
}

/// True for a non-empty string made only of ASCII digits.
pub fn is_keypad_query(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::{is_keypad_query, keypad_code};

    #[test]
    fn keypad_code_maps_letters() {
        assert_eq!(keypad_code("bob"), "262");
        assert_eq!(keypad_code("ada lovelace"), "23256835223");
        assert_eq!(keypad_code("pqrs tuv wxyz"), "77778889999");
    }

    #[test]
    fn keypad_code_skips_non_letters() {
        assert_eq!(keypad_code("a1b"), "22");
        assert_eq!(keypad_code("o'neil-smith"), "6634576484");
        assert_eq!(keypad_code("张三"), "");
        assert_eq!(keypad_code("张 li"), "54");
    }

    #[test]
    fn keypad_code_folds_ascii_case() {
        assert_eq!(keypad_code("Bob"), keypad_code("bob"));
    }

    #[test]
    fn keypad_codes_may_collide() {
        assert_eq!(keypad_code("abc"), keypad_code("cab"));
    }

    #[test]
    fn keypad_query_requires_digits() {
        assert!(is_keypad_query("262"));
        assert!(!is_keypad_query(""));
        assert!(!is_keypad_query("26a"));
        assert!(!is_keypad_query(" 262"));
    }
}
