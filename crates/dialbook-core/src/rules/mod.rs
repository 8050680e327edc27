pub mod validation;

pub use validation::{
    validate_contact, validate_email, validate_name, validate_phone, validate_remark,
    ValidationError, ValidationErrorKind, MAX_NAME_CHARS, MAX_PHONE_DIGITS, MAX_REMARK_CHARS,
    MIN_PHONE_DIGITS,
};
