//! Property tests for filtering, id allocation and validation.

use proptest::prelude::*;
use rusty_contacts::prelude::{
    ContactFields, ContactId, ContactManager, Gender, ValidationErrorKind, matches_filter,
};
use rusty_contacts::validation::{validate_email, validate_phone};

fn gender_strategy() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Female), Just(Gender::Male)]
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z ]{0,15}").unwrap()
}

fn phone_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"\(?[0-9]{3}\)? ?[0-9]{3}-[0-9]{4}").unwrap()
}

fn fields_strategy() -> impl Strategy<Value = ContactFields> {
    (name_strategy(), phone_strategy(), gender_strategy())
        .prop_map(|(name, phone, gender)| ContactFields::new(name, phone, "", gender))
}

fn filter_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9() -]{0,4}").unwrap()
}

/// Either a create with generated fields or a delete of some id.
#[derive(Debug, Clone)]
enum Op {
    Create(ContactFields),
    Delete(u64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        fields_strategy().prop_map(Op::Create),
        (1u64..20).prop_map(Op::Delete),
    ]
}

proptest! {
    #[test]
    fn list_returns_exactly_the_matches(
        extra in prop::collection::vec(fields_strategy(), 0..8),
        filter in filter_strategy(),
    ) {
        let mut store = ContactManager::new();
        for fields in extra {
            store.create(fields).unwrap();
        }

        let listed: Vec<ContactId> = store.list(&filter).iter().map(|c| c.id).collect();
        let expected: Vec<ContactId> = store
            .contact_list()
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&filter.to_lowercase()) || c.phone.contains(&filter)
            })
            .map(|c| c.id)
            .collect();

        prop_assert_eq!(&listed, &expected);
        for contact in store.contact_list() {
            prop_assert_eq!(listed.contains(&contact.id), matches_filter(contact, &filter));
        }
    }

    #[test]
    fn ids_are_unique_and_never_reused(ops in prop::collection::vec(op_strategy(), 0..30)) {
        let mut store = ContactManager::new();
        let mut highest = 4u64;

        for op in ops {
            match op {
                Op::Create(fields) => {
                    let id = store.create(fields).unwrap();
                    prop_assert_eq!(id, ContactId(highest + 1));
                    highest += 1;
                }
                Op::Delete(id) => {
                    let before = store.len();
                    let present = store.get(ContactId(id)).is_some();
                    store.delete(ContactId(id));
                    prop_assert_eq!(store.len(), if present { before - 1 } else { before });
                }
            }
        }

        let ids: Vec<u64> = store.contact_list().iter().map(|c| c.id.0).collect();
        prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(ids.iter().all(|&id| id <= highest));
    }

    #[test]
    fn phones_with_ten_digits_are_accepted(phone in phone_strategy()) {
        prop_assert_eq!(validate_phone(&phone), None);
    }

    #[test]
    fn phones_with_letters_are_rejected(
        prefix in "[0-9]{10}",
        letter in "[a-zA-Z+.]",
    ) {
        let phone = format!("{prefix}{letter}");
        prop_assert_eq!(validate_phone(&phone), Some(ValidationErrorKind::InvalidPhone));
    }

    #[test]
    fn emails_without_at_are_rejected(email in "[a-z.]{1,20}") {
        prop_assert_eq!(validate_email(&email), Some(ValidationErrorKind::InvalidEmail));
    }
}
