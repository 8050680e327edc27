use crate::domain::Contact;
use serde::{Deserialize, Serialize};

/// Contact as shown to callers, with derived fields filled in. `position` is
/// the 1-based place in the contact list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDto {
    pub position: usize,
    pub name: String,
    pub phone: String,
    pub formatted_phone: String,
    pub email: String,
    pub remark: String,
    pub country: String,
    pub is_frequent: bool,
}

impl ContactDto {
    pub fn from_contact(index: usize, contact: &Contact) -> Self {
        Self {
            position: index + 1,
            name: contact.name().to_string(),
            phone: contact.phone().to_string(),
            formatted_phone: contact.format_phone(),
            email: contact.email().to_string(),
            remark: contact.remark().to_string(),
            country: contact.country().to_string(),
            is_frequent: contact.is_frequent(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeypadDto {
    pub text: String,
    pub code: String,
}
