use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

pub const MAX_NAME_CHARS: usize = 50;
pub const MIN_PHONE_DIGITS: usize = 7;
pub const MAX_PHONE_DIGITS: usize = 15;
pub const MAX_REMARK_CHARS: usize = 200;

// CJK unified ideographs, Latin letters, whitespace, '.', '\'' and '-'.
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\x{4e00}-\x{9fa5}a-zA-Z\s.'-]{1,50}$").expect("valid name pattern")
});

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s-]{7,15}$").expect("valid phone pattern"));

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email pattern")
});

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid name: {0}")]
    InvalidName(&'static str),
    #[error("invalid phone: {0}")]
    InvalidPhone(&'static str),
    #[error("invalid email: {0}")]
    InvalidEmail(&'static str),
    #[error("invalid remark: {0}")]
    InvalidRemark(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    Name,
    Phone,
    Email,
    Remark,
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::InvalidName(_) => ValidationErrorKind::Name,
            ValidationError::InvalidPhone(_) => ValidationErrorKind::Phone,
            ValidationError::InvalidEmail(_) => ValidationErrorKind::Email,
            ValidationError::InvalidRemark(_) => ValidationErrorKind::Remark,
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::InvalidName(reason)
            | ValidationError::InvalidPhone(reason)
            | ValidationError::InvalidEmail(reason)
            | ValidationError::InvalidRemark(reason) => reason,
        }
    }
}

pub fn validate_name(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidName("name is required"));
    }
    if trimmed.chars().count() > MAX_NAME_CHARS {
        return Err(ValidationError::InvalidName(
            "name must be at most 50 characters",
        ));
    }
    if !NAME_PATTERN.is_match(trimmed) {
        return Err(ValidationError::InvalidName(
            "name may only contain Chinese or Latin letters, spaces, '.', '\'' and '-'",
        ));
    }
    Ok(())
}

pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::InvalidPhone("phone is required"));
    }

    let digits = value
        .chars()
        .filter(|ch| !matches!(ch, ' ' | '-'))
        .count();
    if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits) {
        return Err(ValidationError::InvalidPhone(
            "phone must be 7-15 characters long excluding spaces and hyphens",
        ));
    }

    if !PHONE_PATTERN.is_match(value) {
        return Err(ValidationError::InvalidPhone(
            "phone must look like +8613800138000, 13800138000 or 010-12345678",
        ));
    }
    Ok(())
}

/// An empty email is valid; email is optional.
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    if !EMAIL_PATTERN.is_match(value) {
        return Err(ValidationError::InvalidEmail(
            "email must look like name@example.com",
        ));
    }
    Ok(())
}

pub fn validate_remark(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() > MAX_REMARK_CHARS {
        return Err(ValidationError::InvalidRemark(
            "remark must be at most 200 characters",
        ));
    }
    Ok(())
}

/// Checks name, phone, email and remark in that order and stops at the first
/// failure.
pub fn validate_contact(
    name: &str,
    phone: &str,
    email: &str,
    remark: &str,
) -> Result<(), ValidationError> {
    validate_name(name)?;
    validate_phone(phone)?;
    validate_email(email)?;
    validate_remark(remark)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_accepts_latin_chinese_and_punctuation() {
        assert!(validate_name("Ada Lovelace").is_ok());
        assert!(validate_name("张三").is_ok());
        assert!(validate_name("Mary-Jane O'Neil Jr.").is_ok());
        assert!(validate_name("  Grace  ").is_ok());
    }

    #[test]
    fn name_rejects_empty_and_blank() {
        assert_eq!(
            validate_name("   ").unwrap_err().kind(),
            ValidationErrorKind::Name
        );
        assert!(validate_name("").is_err());
    }

    #[test]
    fn name_rejects_digits_and_symbols() {
        assert!(validate_name("R2D2").is_err());
        assert!(validate_name("ada@home").is_err());
    }

    #[test]
    fn name_length_counts_characters() {
        let fifty = "张".repeat(50);
        assert!(validate_name(&fifty).is_ok());
        let fifty_one = "a".repeat(51);
        assert_eq!(
            validate_name(&fifty_one).unwrap_err().reason(),
            "name must be at most 50 characters"
        );
    }

    #[test]
    fn phone_accepts_common_shapes() {
        assert!(validate_phone("+8613800138000").is_ok());
        assert!(validate_phone("13800138000").is_ok());
        assert!(validate_phone("010-12345678").is_ok());
        assert!(validate_phone("+1 415 555 1212").is_ok());
    }

    #[test]
    fn phone_rejects_empty_short_and_letters() {
        assert_eq!(
            validate_phone("").unwrap_err(),
            ValidationError::InvalidPhone("phone is required")
        );
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("1234567890123456").is_err());
        assert!(validate_phone("138-abc-8000").is_err());
        assert!(validate_phone("++8613800138000").is_err());
    }

    #[test]
    fn phone_length_excludes_separators() {
        // Nine digits, but the spaced form is longer than the shape allows.
        assert!(validate_phone("1 2 3 4 5 6 7 8 9").is_err());
        assert!(validate_phone("123-4567").is_ok());
    }

    #[test]
    fn email_is_optional_but_checked() {
        assert!(validate_email("").is_ok());
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("first.last+tag@mail.example.org").is_ok());
        assert!(validate_email("ada@example").is_err());
        assert!(validate_email("ada@example.c").is_err());
        assert!(validate_email("not an email").is_err());
    }

    #[test]
    fn remark_limit() {
        assert!(validate_remark("").is_ok());
        assert!(validate_remark(&"备".repeat(200)).is_ok());
        assert!(validate_remark(&"x".repeat(201)).is_err());
    }

    #[test]
    fn contact_reports_name_before_phone() {
        let err = validate_contact("", "abc", "bad", "").unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::Name);

        let err = validate_contact("Ada", "abc", "bad", "").unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::Phone);

        let err = validate_contact("Ada", "13800138000", "bad", &"x".repeat(300)).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::Email);
    }
}
