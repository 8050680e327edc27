use crate::domain::Contact;
use crate::error::CoreError;
use crate::keypad::{is_keypad_query, keypad_code};
use std::collections::HashSet;

/// Search fields derived from one contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub position: usize,
    pub name_lower: String,
    pub phone: String,
    pub email_lower: String,
    pub keypad_code: String,
    pub is_frequent: bool,
}

impl IndexEntry {
    fn from_contact(position: usize, contact: &Contact) -> Self {
        let name_lower = contact.name().to_lowercase();
        let keypad_code = keypad_code(&name_lower);
        Self {
            position,
            name_lower,
            phone: contact.phone().to_string(),
            email_lower: contact.email().to_lowercase(),
            keypad_code,
            is_frequent: contact.is_frequent(),
        }
    }
}

/// Read-side view of the contact list. Always built whole from the current
/// list; every query answers with list positions in list order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactIndex {
    entries: Vec<IndexEntry>,
}

impl ContactIndex {
    pub fn build(contacts: &[Contact]) -> Self {
        let entries = contacts
            .iter()
            .enumerate()
            .map(|(position, contact)| IndexEntry::from_contact(position, contact))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn by_name(&self, query: &str) -> Vec<usize> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.positions(|entry| entry.name_lower.contains(&needle))
    }

    pub fn by_phone(&self, query: &str) -> Vec<usize> {
        if query.is_empty() {
            return Vec::new();
        }
        self.positions(|entry| entry.phone.contains(query))
    }

    pub fn by_email(&self, query: &str) -> Vec<usize> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.positions(|entry| entry.email_lower.contains(&needle))
    }

    /// Substring match on the keypad code, so a sequence may hit mid-name.
    pub fn by_keypad(&self, code: &str) -> Result<Vec<usize>, CoreError> {
        if code.is_empty() {
            return Ok(Vec::new());
        }
        if !is_keypad_query(code) {
            return Err(CoreError::InvalidKeypadCode(code.to_string()));
        }
        Ok(self.positions(|entry| entry.keypad_code.contains(code)))
    }

    pub fn frequent(&self) -> Vec<usize> {
        self.positions(|entry| entry.is_frequent)
    }

    /// Name, then phone, then email, then (for digit-only terms) keypad code.
    /// A contact is taken on its first matching clause and the result is
    /// deduplicated by phone.
    pub fn unified(&self, term: &str) -> Vec<usize> {
        if term.is_empty() {
            return Vec::new();
        }
        let needle = term.to_lowercase();
        let digits_only = is_keypad_query(term);

        let mut seen: HashSet<&str> = HashSet::new();
        let mut out = Vec::new();
        for entry in &self.entries {
            let matched = entry.name_lower.contains(&needle)
                || entry.phone.contains(term)
                || (!entry.email_lower.is_empty() && entry.email_lower.contains(&needle))
                || (digits_only && entry.keypad_code.contains(term));
            if matched && seen.insert(entry.phone.as_str()) {
                out.push(entry.position);
            }
        }
        out
    }

    fn positions<F>(&self, predicate: F) -> Vec<usize>
    where
        F: Fn(&IndexEntry) -> bool,
    {
        self.entries
            .iter()
            .filter(|entry| predicate(entry))
            .map(|entry| entry.position)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::ContactIndex;
    use crate::domain::Contact;
    use crate::error::CoreError;

    fn contact(name: &str, phone: &str, email: &str, frequent: bool) -> Contact {
        Contact::new(name, phone, email, "", frequent).expect("valid contact")
    }

    fn sample() -> Vec<Contact> {
        vec![
            contact("Ada Lovelace", "+8613800138000", "ada@example.com", true),
            contact("Bob Stone", "13912345678", "", false),
            contact("张三", "+85291234567", "zhang@Example.org", true),
            contact("Grace Hopper", "010-12345678", "grace@navy.mil", false),
        ]
    }

    #[test]
    fn build_derives_entries() {
        let index = ContactIndex::build(&sample());
        assert_eq!(index.len(), 4);
        let first = &index.entries()[0];
        assert_eq!(first.name_lower, "ada lovelace");
        assert_eq!(first.keypad_code, "23256835223");
        assert_eq!(index.entries()[2].keypad_code, "");
    }

    #[test]
    fn name_search_ignores_case() {
        let index = ContactIndex::build(&sample());
        assert_eq!(index.by_name("LOVE"), vec![0]);
        assert_eq!(index.by_name("o"), vec![0, 1, 3]);
        assert_eq!(index.by_name("张"), vec![2]);
        assert!(index.by_name("").is_empty());
    }

    #[test]
    fn phone_search_is_raw_substring() {
        let index = ContactIndex::build(&sample());
        assert_eq!(index.by_phone("138"), vec![0]);
        assert_eq!(index.by_phone("-1234"), vec![3]);
        assert!(index.by_phone("+86 138").is_empty());
    }

    #[test]
    fn email_search_ignores_case() {
        let index = ContactIndex::build(&sample());
        assert_eq!(index.by_email("EXAMPLE"), vec![0, 2]);
    }

    #[test]
    fn keypad_search_matches_mid_name() {
        let index = ContactIndex::build(&sample());
        // "stone" -> 78663
        assert_eq!(index.by_keypad("866").expect("digits"), vec![1]);
        assert_eq!(index.by_keypad("262").expect("digits"), vec![1]);
        assert!(index.by_keypad("").expect("empty").is_empty());
    }

    #[test]
    fn keypad_search_rejects_non_digits() {
        let index = ContactIndex::build(&sample());
        let err = index.by_keypad("26a").unwrap_err();
        assert_eq!(err, CoreError::InvalidKeypadCode("26a".to_string()));
    }

    #[test]
    fn frequent_filters_flag() {
        let index = ContactIndex::build(&sample());
        assert_eq!(index.frequent(), vec![0, 2]);
    }

    #[test]
    fn unified_search_combines_clauses_in_list_order() {
        let index = ContactIndex::build(&sample());
        // Phone hit on Ada, keypad hit on Bob ("bob" -> 262).
        assert_eq!(index.unified("1380"), vec![0]);
        assert_eq!(index.unified("262"), vec![1]);
        // Email hits ignore case.
        assert_eq!(index.unified("navy"), vec![3]);
        assert_eq!(index.unified("ZHANG"), vec![2]);
        assert!(index.unified("").is_empty());
    }

    #[test]
    fn unified_search_never_repeats_a_contact() {
        let index = ContactIndex::build(&sample());
        // "3" hits every phone and most keypad codes.
        let hits = index.unified("3");
        assert_eq!(hits, vec![0, 1, 2, 3]);
    }
}
