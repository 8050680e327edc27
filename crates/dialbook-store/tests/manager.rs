use dialbook_core::{Contact, CoreError};
use dialbook_store::error::{StoreError, StoreErrorKind};
use dialbook_store::{ContactManager, Store};
use std::path::Path;
use tempfile::TempDir;

fn contact(name: &str, phone: &str, email: &str) -> Contact {
    Contact::new(name, phone, email, "", false).expect("valid contact")
}

fn open_manager(path: &Path) -> ContactManager {
    ContactManager::new(Store::open(path).expect("open store"))
}

fn seeded(path: &Path) -> ContactManager {
    let mut manager = open_manager(path);
    manager
        .add(contact("Ada Lovelace", "+8613800138000", "ada@example.com"))
        .expect("add ada");
    manager
        .add(contact("Bob Stone", "13912345678", ""))
        .expect("add bob");
    manager
        .add(contact("Grace Hopper", "010-12345678", "grace@navy.mil"))
        .expect("add grace");
    manager
}

fn names(hits: &[dialbook_store::ContactRef<'_>]) -> Vec<String> {
    hits.iter()
        .map(|hit| hit.contact.name().to_string())
        .collect()
}

#[test]
fn add_rejects_exact_duplicate_phone() {
    let temp = TempDir::new().expect("temp dir");
    let mut manager = seeded(&temp.path().join("contacts.json"));

    let err = manager
        .add(contact("Someone Else", "13912345678", ""))
        .expect_err("duplicate");
    assert_eq!(err.kind(), StoreErrorKind::DuplicatePhone);
    assert_eq!(manager.len(), 3);
}

#[test]
fn add_rejects_differently_formatted_duplicate() {
    let temp = TempDir::new().expect("temp dir");
    let mut manager = seeded(&temp.path().join("contacts.json"));

    // Same line as Ada's +8613800138000.
    let err = manager
        .add(contact("Ada Again", "138 0013 8000", ""))
        .expect_err("duplicate");
    assert!(matches!(err, StoreError::DuplicatePhone(phone) if phone == "138 0013 8000"));
    assert_eq!(manager.len(), 3);
}

#[test]
fn search_follows_add_and_delete() {
    let temp = TempDir::new().expect("temp dir");
    let mut manager = seeded(&temp.path().join("contacts.json"));

    manager
        .add(contact("Linus Torvalds", "+358401234567", ""))
        .expect("add linus");
    let hits = manager.search_by_name("TORVALD");
    assert_eq!(names(&hits), vec!["Linus Torvalds"]);
    assert_eq!(hits[0].index, 3);

    manager.delete(3).expect("delete");
    assert!(manager.search_by_name("torvald").is_empty());
}

#[test]
fn update_replaces_and_reindexes() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("contacts.json");
    let mut manager = seeded(&path);

    manager
        .update(1, contact("Robert Stone", "13912345678", "bob@example.com"))
        .expect("update keeps own phone");
    assert_eq!(names(&manager.search_by_email("bob@")), vec!["Robert Stone"]);
    assert!(manager.search_by_name("bob ").is_empty());

    let reopened = open_manager(&path);
    assert_eq!(reopened.get(1).expect("contact").name(), "Robert Stone");
}

#[test]
fn update_rejects_phone_of_another_contact() {
    let temp = TempDir::new().expect("temp dir");
    let mut manager = seeded(&temp.path().join("contacts.json"));

    let err = manager
        .update(1, contact("Bob Stone", "+8613800138000", ""))
        .expect_err("duplicate");
    assert_eq!(err.kind(), StoreErrorKind::DuplicatePhone);
    assert_eq!(manager.get(1).expect("bob").phone(), "13912345678");
}

#[test]
fn out_of_range_index_is_rejected() {
    let temp = TempDir::new().expect("temp dir");
    let mut manager = seeded(&temp.path().join("contacts.json"));

    let err = manager
        .update(9, contact("Nobody", "13700137000", ""))
        .expect_err("index");
    assert!(matches!(err, StoreError::InvalidIndex { index: 9, len: 3 }));
    assert_eq!(
        manager.delete(3).expect_err("index").kind(),
        StoreErrorKind::InvalidIndex
    );
    assert_eq!(manager.len(), 3);
}

#[test]
fn keypad_search_validates_digits() {
    let temp = TempDir::new().expect("temp dir");
    let manager = seeded(&temp.path().join("contacts.json"));

    // "hopper" -> 467737
    let hits = manager.search_by_keypad("4677").expect("digits");
    assert_eq!(names(&hits), vec!["Grace Hopper"]);

    let err = manager.search_by_keypad("46a").expect_err("letters");
    assert!(matches!(
        err,
        StoreError::Core(CoreError::InvalidKeypadCode(_))
    ));
}

#[test]
fn phone_search_uses_raw_substring() {
    let temp = TempDir::new().expect("temp dir");
    let manager = seeded(&temp.path().join("contacts.json"));

    assert_eq!(names(&manager.search_by_phone("-123")), vec!["Grace Hopper"]);
    assert!(manager.search_by_phone("+86 138").is_empty());
}

#[test]
fn unified_search_orders_by_list_position() {
    let temp = TempDir::new().expect("temp dir");
    let manager = seeded(&temp.path().join("contacts.json"));

    // "262" is Bob's keypad prefix; "1234" is in Bob's and Grace's phones.
    assert_eq!(names(&manager.unified_search("262")), vec!["Bob Stone"]);
    assert_eq!(
        names(&manager.unified_search("1234")),
        vec!["Bob Stone", "Grace Hopper"]
    );
    assert_eq!(
        names(&manager.unified_search("navy")),
        vec!["Grace Hopper"]
    );
}

#[test]
fn toggle_frequent_persists_and_filters() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("contacts.json");
    let mut manager = seeded(&path);

    assert!(manager.get_frequent().is_empty());
    assert!(manager.toggle_frequent(2).expect("toggle"));
    assert_eq!(names(&manager.get_frequent()), vec!["Grace Hopper"]);

    let reopened = open_manager(&path);
    assert_eq!(names(&reopened.get_frequent()), vec!["Grace Hopper"]);
}

#[test]
fn get_all_preserves_insertion_order() {
    let temp = TempDir::new().expect("temp dir");
    let manager = seeded(&temp.path().join("contacts.json"));
    let all = manager.get_all();
    assert_eq!(
        names(&all),
        vec!["Ada Lovelace", "Bob Stone", "Grace Hopper"]
    );
    assert_eq!(
        all.iter().map(|hit| hit.index).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
}

#[test]
fn reload_picks_up_external_changes() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("contacts.json");
    let mut manager = seeded(&path);

    let mut other = open_manager(&path);
    other.delete(0).expect("delete");

    assert_eq!(manager.reload().expect("reload"), 0);
    assert_eq!(manager.len(), 2);
    assert!(manager.search_by_name("ada").is_empty());
}

#[test]
fn keypad_code_utility_matches_index() {
    assert_eq!(ContactManager::keypad_code("bob"), "262");
    assert_eq!(ContactManager::keypad_code("a1b"), "22");
}

#[test]
fn loaded_spellings_of_one_number_stay_editable() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("contacts.json");
    std::fs::write(
        &path,
        r#"[
  {"name": "Ada", "phone": "13800138000"},
  {"name": "Ada Mobile", "phone": "+8613800138000"}
]"#,
    )
    .expect("write file");

    let mut manager = open_manager(&path);
    assert_eq!(manager.len(), 2);

    assert!(manager.toggle_frequent(1).expect("toggle second"));
    manager
        .update(
            1,
            Contact::new("Ada Mobile", "+8613800138000", "", "work line", true)
                .expect("valid contact"),
        )
        .expect("keep own phone");
    assert_eq!(manager.get(1).expect("contact").remark(), "work line");

    // Taking the other spelling's key from a third number is still refused.
    manager
        .add(contact("Bob Stone", "13912345678", ""))
        .expect("add bob");
    let err = manager
        .update(2, contact("Bob Stone", "138 0013 8000", ""))
        .expect_err("duplicate");
    assert_eq!(err.kind(), StoreErrorKind::DuplicatePhone);
}
