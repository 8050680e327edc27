pub mod contact;
pub mod format;
pub mod phone;

pub use contact::{Contact, ContactRecord, ContactUpdate};
pub use format::{FileFormat, UnsupportedFormat};
pub use phone::{country_for_phone, format_phone, match_dialing_code, phone_key, COUNTRY_CODES};
