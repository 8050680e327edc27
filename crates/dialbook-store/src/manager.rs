use crate::error::{Result, StoreError};
use crate::Store;
use dialbook_core::{Contact, ContactIndex};
use tracing::{debug, info, warn};

/// A contact together with its position in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactRef<'a> {
    pub index: usize,
    pub contact: &'a Contact,
}

/// Single entry point for changing contacts. Enforces phone uniqueness and
/// keeps the search index rebuilt from the store after every change.
pub struct ContactManager {
    store: Store,
    index: ContactIndex,
}

impl ContactManager {
    pub fn new(store: Store) -> Self {
        let index = ContactIndex::build(store.contacts());
        debug!(entries = index.len(), "search index built");
        Self { store, index }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn add(&mut self, contact: Contact) -> Result<()> {
        if self.store.position_by_phone_key(&contact.phone_key()).is_some() {
            warn!(phone = contact.phone(), "rejecting duplicate phone");
            return Err(StoreError::DuplicatePhone(contact.phone().to_string()));
        }

        let name = contact.name().to_string();
        let phone = contact.phone().to_string();
        self.store.add(contact)?;
        self.rebuild_index();
        info!(%name, %phone, "contact added");
        Ok(())
    }

    pub fn update(&mut self, index: usize, contact: Contact) -> Result<()> {
        self.check_index(index)?;
        let key = contact.phone_key();
        if let Some(existing) = self.store.position_by_phone_key(&key) {
            // Files written elsewhere may already hold two spellings of one
            // number; a contact may always keep its own.
            let keeps_own = self
                .store
                .get(index)
                .is_some_and(|current| current.phone_key() == key);
            if existing != index && !keeps_own {
                warn!(phone = contact.phone(), index, existing, "rejecting duplicate phone");
                return Err(StoreError::DuplicatePhone(contact.phone().to_string()));
            }
        }

        let name = contact.name().to_string();
        let previous = self.store.update(index, contact)?;
        self.rebuild_index();
        info!(index, from = previous.name(), to = %name, "contact updated");
        Ok(())
    }

    pub fn delete(&mut self, index: usize) -> Result<Contact> {
        self.check_index(index)?;
        let removed = self.store.delete(index)?;
        self.rebuild_index();
        info!(index, name = removed.name(), phone = removed.phone(), "contact deleted");
        Ok(removed)
    }

    /// Flips the frequent flag of the contact at `index` and returns the new
    /// value.
    pub fn toggle_frequent(&mut self, index: usize) -> Result<bool> {
        let mut contact = self.get(index)?.clone();
        let flag = contact.toggle_frequent();
        self.update(index, contact)?;
        Ok(flag)
    }

    /// Re-reads the file and rebuilds the index. Returns the number of
    /// skipped records.
    pub fn reload(&mut self) -> Result<usize> {
        let skipped = self.store.load()?;
        self.rebuild_index();
        Ok(skipped)
    }

    pub fn get(&self, index: usize) -> Result<&Contact> {
        self.store.get(index).ok_or(StoreError::InvalidIndex {
            index,
            len: self.store.len(),
        })
    }

    pub fn get_all(&self) -> Vec<ContactRef<'_>> {
        self.store
            .contacts()
            .iter()
            .enumerate()
            .map(|(index, contact)| ContactRef { index, contact })
            .collect()
    }

    pub fn get_frequent(&self) -> Vec<ContactRef<'_>> {
        self.resolve(self.index.frequent())
    }

    pub fn search_by_name(&self, query: &str) -> Vec<ContactRef<'_>> {
        let hits = self.resolve(self.index.by_name(query));
        debug!(query, results = hits.len(), "name search");
        hits
    }

    pub fn search_by_phone(&self, query: &str) -> Vec<ContactRef<'_>> {
        let hits = self.resolve(self.index.by_phone(query));
        debug!(query, results = hits.len(), "phone search");
        hits
    }

    pub fn search_by_keypad(&self, code: &str) -> Result<Vec<ContactRef<'_>>> {
        let hits = self.resolve(self.index.by_keypad(code)?);
        debug!(code, results = hits.len(), "keypad search");
        Ok(hits)
    }

    pub fn search_by_email(&self, query: &str) -> Vec<ContactRef<'_>> {
        let hits = self.resolve(self.index.by_email(query));
        debug!(query, results = hits.len(), "email search");
        hits
    }

    pub fn unified_search(&self, term: &str) -> Vec<ContactRef<'_>> {
        let hits = self.resolve(self.index.unified(term));
        debug!(term, results = hits.len(), "unified search");
        hits
    }

    pub fn keypad_code(text: &str) -> String {
        dialbook_core::keypad_code(text)
    }

    fn rebuild_index(&mut self) {
        self.index = ContactIndex::build(self.store.contacts());
        debug!(entries = self.index.len(), "search index rebuilt");
    }

    fn resolve(&self, positions: Vec<usize>) -> Vec<ContactRef<'_>> {
        let contacts = self.store.contacts();
        positions
            .into_iter()
            .filter_map(|index| {
                contacts
                    .get(index)
                    .map(|contact| ContactRef { index, contact })
            })
            .collect()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.store.len() {
            return Err(StoreError::InvalidIndex {
                index,
                len: self.store.len(),
            });
        }
        Ok(())
    }
}
