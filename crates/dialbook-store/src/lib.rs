pub mod error;
pub(crate) mod file;
pub mod manager;
pub mod paths;

pub use manager::{ContactManager, ContactRef};

use crate::error::{Result, StoreError};
use dialbook_core::Contact;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Durable, ordered contact list backed by a JSON file.
///
/// Every mutating call saves before it returns. When the save fails the
/// in-memory list is restored, so memory and disk never disagree.
pub struct Store {
    path: PathBuf,
    contacts: Vec<Contact>,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let mut store = Self {
            path: path.to_path_buf(),
            contacts: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    /// Replaces the in-memory list with the file contents. Returns the number
    /// of records that were skipped as invalid. On error the current list is
    /// kept.
    pub fn load(&mut self) -> Result<usize> {
        let Some(loaded) = file::read_contacts(&self.path)? else {
            info!(path = %self.path.display(), "contacts file missing, starting empty");
            self.contacts.clear();
            return Ok(0);
        };

        if loaded.skipped > 0 {
            warn!(
                path = %self.path.display(),
                loaded = loaded.contacts.len(),
                skipped = loaded.skipped,
                "loaded contacts with invalid entries skipped"
            );
        } else {
            info!(
                path = %self.path.display(),
                loaded = loaded.contacts.len(),
                "loaded contacts"
            );
        }
        self.contacts = loaded.contacts;
        Ok(loaded.skipped)
    }

    pub fn save(&self) -> Result<()> {
        file::write_contacts(&self.path, &self.contacts)?;
        info!(path = %self.path.display(), count = self.contacts.len(), "saved contacts");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.contacts.get(index)
    }

    /// Exact match on the stored phone string.
    pub fn get_by_phone(&self, phone: &str) -> Option<&Contact> {
        self.contacts.iter().find(|contact| contact.phone() == phone)
    }

    /// Position of the contact whose canonical phone key equals `key`.
    pub fn position_by_phone_key(&self, key: &str) -> Option<usize> {
        self.contacts
            .iter()
            .position(|contact| contact.phone_key() == key)
    }

    pub fn add(&mut self, contact: Contact) -> Result<()> {
        self.contacts.push(contact);
        if let Err(err) = self.save() {
            self.contacts.pop();
            return Err(err);
        }
        Ok(())
    }

    /// Replaces the contact at `index`, returning the previous value.
    pub fn update(&mut self, index: usize, contact: Contact) -> Result<Contact> {
        self.check_index(index)?;
        let previous = std::mem::replace(&mut self.contacts[index], contact);
        if let Err(err) = self.save() {
            self.contacts[index] = previous;
            return Err(err);
        }
        Ok(previous)
    }

    pub fn delete(&mut self, index: usize) -> Result<Contact> {
        self.check_index(index)?;
        let removed = self.contacts.remove(index);
        if let Err(err) = self.save() {
            self.contacts.insert(index, removed);
            return Err(err);
        }
        Ok(removed)
    }

    pub fn clear(&mut self) -> Result<()> {
        let previous = std::mem::take(&mut self.contacts);
        if let Err(err) = self.save() {
            self.contacts = previous;
            return Err(err);
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.contacts.len() {
            return Err(StoreError::InvalidIndex {
                index,
                len: self.contacts.len(),
            });
        }
        Ok(())
    }
}
