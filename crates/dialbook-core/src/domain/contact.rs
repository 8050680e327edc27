use crate::domain::phone::{country_for_phone, format_phone, phone_key};
use crate::error::CoreError;
use crate::rules::validation::validate_contact;
use serde::{Deserialize, Serialize};

/// A validated address-book entry.
///
/// Fields are private so that every value in circulation has passed
/// [`validate_contact`]; `country` is derived from `phone` and never set
/// directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    name: String,
    phone: String,
    email: String,
    remark: String,
    is_frequent: bool,
    country: &'static str,
}

/// The five stored fields of a contact, as written to disk and exchanged with
/// importers. Becomes a [`Contact`] only through [`Contact::from_record`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub remark: String,
    #[serde(default)]
    pub is_frequent: bool,
}

/// Partial change set for [`Contact::update`]; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub remark: Option<String>,
    pub is_frequent: Option<bool>,
}

impl ContactUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.remark.is_none()
            && self.is_frequent.is_none()
    }
}

impl Contact {
    pub fn new(
        name: &str,
        phone: &str,
        email: &str,
        remark: &str,
        is_frequent: bool,
    ) -> Result<Self, CoreError> {
        let name = name.trim();
        let phone = phone.trim();
        let email = email.trim();
        let remark = remark.trim();
        validate_contact(name, phone, email, remark)?;

        Ok(Self {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            remark: remark.to_string(),
            is_frequent,
            country: country_for_phone(phone),
        })
    }

    pub fn from_record(record: &ContactRecord) -> Result<Self, CoreError> {
        Self::new(
            &record.name,
            &record.phone,
            &record.email,
            &record.remark,
            record.is_frequent,
        )
    }

    pub fn to_record(&self) -> ContactRecord {
        ContactRecord {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            remark: self.remark.clone(),
            is_frequent: self.is_frequent,
        }
    }

    /// Applies `update` only if the resulting record is valid as a whole.
    pub fn update(&mut self, update: ContactUpdate) -> Result<(), CoreError> {
        let next = Self::new(
            update.name.as_deref().unwrap_or(&self.name),
            update.phone.as_deref().unwrap_or(&self.phone),
            update.email.as_deref().unwrap_or(&self.email),
            update.remark.as_deref().unwrap_or(&self.remark),
            update.is_frequent.unwrap_or(self.is_frequent),
        )?;
        *self = next;
        Ok(())
    }

    pub fn toggle_frequent(&mut self) -> bool {
        self.is_frequent = !self.is_frequent;
        self.is_frequent
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn remark(&self) -> &str {
        &self.remark
    }

    pub fn is_frequent(&self) -> bool {
        self.is_frequent
    }

    pub fn country(&self) -> &'static str {
        self.country
    }

    pub fn format_phone(&self) -> String {
        format_phone(&self.phone)
    }

    pub fn phone_key(&self) -> String {
        // Validated phones always carry at least seven digits.
        phone_key(&self.phone).unwrap_or_else(|| self.phone.clone())
    }
}
