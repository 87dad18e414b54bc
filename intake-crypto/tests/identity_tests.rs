use intake_crypto::derive_client_id;

#[test]
fn identical_inputs_yield_identical_identifiers() {
    let a = derive_client_id("Dupont", "Marie", "1980-05-12");
    let b = derive_client_id("Dupont", "Marie", "1980-05-12");
    assert_eq!(a, b);
}

#[test]
fn name_case_and_whitespace_do_not_change_identifier() {
    let canonical = derive_client_id("smith", "john", "1975-01-01");
    assert_eq!(derive_client_id("Smith", " john ", "1975-01-01"), canonical);
    assert_eq!(derive_client_id("  SMITH", "John", "1975-01-01"), canonical);
    assert_eq!(derive_client_id("smith  ", "JOHN  ", "1975-01-01"), canonical);
}

#[test]
fn date_of_birth_is_used_verbatim() {
    // Unlike the name fields, the date is not normalized
    assert_ne!(
        derive_client_id("smith", "john", "1975-01-01"),
        derive_client_id("smith", "john", " 1975-01-01")
    );
    assert_ne!(
        derive_client_id("smith", "john", "1975-01-01"),
        derive_client_id("smith", "john", "1975-1-1")
    );
}

#[test]
fn changing_any_field_changes_the_identifier() {
    let base = derive_client_id("dupont", "marie", "1980-05-12");
    assert_ne!(derive_client_id("dupond", "marie", "1980-05-12"), base);
    assert_ne!(derive_client_id("dupont", "maria", "1980-05-12"), base);
    assert_ne!(derive_client_id("dupont", "marie", "1980-05-13"), base);
}

#[test]
fn no_collisions_across_a_small_sample() {
    let sample = [
        ("dupont", "marie", "1980-05-12"),
        ("dupont", "marie", "1980-05-21"),
        ("dupont", "pierre", "1980-05-12"),
        ("martin", "marie", "1980-05-12"),
        ("smith", "john", "1975-01-01"),
        ("smith", "jane", "1975-01-01"),
        ("", "", ""),
        ("a", "b", "c"),
    ];

    let mut seen = std::collections::HashSet::new();
    for (last, first, dob) in sample {
        assert!(
            seen.insert(derive_client_id(last, first, dob)),
            "collision for ({last}, {first}, {dob})"
        );
    }
}

#[test]
fn identifier_has_uuid_shape() {
    let id = derive_client_id("Dupont", "Marie", "1980-05-12").to_string();

    assert_eq!(id.len(), 36);
    assert!(id.chars().all(|c| c == '-' || c.is_ascii_hexdigit()));
    assert!(!id.chars().any(|c| c.is_ascii_uppercase()));

    let group_lengths: Vec<usize> = id.split('-').map(str::len).collect();
    assert_eq!(group_lengths, vec![8, 4, 4, 4, 12]);
}

#[test]
fn known_fixture_guards_against_algorithm_drift() {
    // SHA-256("dupont_marie_1980-05-12") =
    //   da5bac51412c793163785391bb851f8a67f3edf6caff97719f88282fe8ae1005
    assert_eq!(
        derive_client_id("Dupont", "Marie", "1980-05-12").to_string(),
        "da5bac51-412c-7931-6378-5391bb851f8a"
    );
}

#[test]
fn empty_and_malformed_inputs_still_derive() {
    // No error conditions: any strings produce a well-formed identifier
    for (last, first, dob) in [("", "", ""), ("x", "", "not-a-date"), ("", "y", "31/02/9999")] {
        let id = derive_client_id(last, first, dob);
        assert_eq!(id.to_string().len(), 36);
    }
}

#[test]
fn serializes_as_hyphenated_string() {
    let id = derive_client_id("Dupont", "Marie", "1980-05-12");
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"da5bac51-412c-7931-6378-5391bb851f8a\"");

    let back: intake_crypto::ClientId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

// Property-based tests
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn derivation_is_deterministic(last in ".*", first in ".*", dob in ".*") {
            prop_assert_eq!(
                derive_client_id(&last, &first, &dob),
                derive_client_id(&last, &first, &dob)
            );
        }

        #[test]
        fn output_always_has_uuid_shape(last in ".*", first in ".*", dob in ".*") {
            let id = derive_client_id(&last, &first, &dob).to_string();
            prop_assert_eq!(id.len(), 36);
            prop_assert!(id.chars().all(|c| c == '-' || c.is_ascii_hexdigit()));
        }

        #[test]
        fn name_normalization_is_stable(last in "[a-zA-Z]{1,12}", first in "[a-zA-Z]{1,12}", dob in ".*") {
            prop_assert_eq!(
                derive_client_id(&last.to_uppercase(), &format!("  {first}  "), &dob),
                derive_client_id(&last.to_lowercase(), &first, &dob)
            );
        }
    }
}
