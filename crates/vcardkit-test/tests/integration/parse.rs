//! Every valid fixture parses into the cards its JSON expectation lists.

use vcardkit_test::vcard::{VCard, parse_file};
use vcardkit_test::{CardExpectation, load_expectation, vcf_fixtures};

fn values(card: &VCard, name: &str) -> Vec<String> {
    card.get_properties(name)
        .iter()
        .map(|p| p.value.clone())
        .collect()
}

fn check_card(fixture: &str, index: usize, card: &VCard, expected: &CardExpectation) {
    for (name, expected_values) in expected {
        assert_eq!(
            &values(card, name),
            expected_values,
            "{fixture}: card {index}, property {name}"
        );
    }
}

#[test_log::test]
fn valid_fixtures_match_expectations() {
    let fixtures = vcf_fixtures("valid").expect("list valid fixtures");
    assert!(!fixtures.is_empty());

    for path in fixtures {
        let name = path.display().to_string();
        tracing::debug!(fixture = %name, "Checking fixture");

        let cards = parse_file(&path).unwrap_or_else(|e| panic!("{name}: {e}"));
        let expectation = load_expectation(&path).expect("load expectation");

        assert_eq!(cards.len(), expectation.cards.len(), "{name}: card count");
        for (index, (card, expected)) in cards.iter().zip(&expectation.cards).enumerate() {
            check_card(&name, index, card, expected);
        }
    }
}

#[test_log::test]
fn every_valid_card_has_version_and_fn() {
    for path in vcf_fixtures("valid").expect("list valid fixtures") {
        for card in parse_file(&path).expect("parse fixture") {
            assert_eq!(card.version(), Some("4.0"));
            assert!(card.formatted_name().is_some_and(|v| !v.trim().is_empty()));
        }
    }
}

#[test_log::test]
fn multiple_cards_keep_source_order() {
    let path = vcardkit_test::fixtures_dir().join("valid/multiple.vcf");
    let cards = parse_file(path).expect("parse fixture");
    let names: Vec<_> = cards.iter().filter_map(VCard::formatted_name).collect();
    assert_eq!(names, ["Alice Example", "Bob Example", "Carol Example"]);
}

#[test_log::test]
fn parameters_are_decoded() {
    let path = vcardkit_test::fixtures_dir().join("valid/escapes.vcf");
    let cards = parse_file(path).expect("parse fixture");
    let quoted = cards[0].get_property("X-QUOTED").expect("X-QUOTED present");

    assert_eq!(quoted.get_param_value("X-LABEL"), Some("semi;colon:comma,"));
    assert_eq!(quoted.get_param_value("X-CARET"), Some("\"quoted\" ^ caret"));
}

#[test_log::test]
fn repeated_type_parameters_accumulate() {
    let path = vcardkit_test::fixtures_dir().join("valid/groups.vcf");
    let cards = parse_file(path).expect("parse fixture");
    let email = &cards[0].emails()[0];

    assert_eq!(email.group.as_deref(), Some("item2"));
    assert_eq!(email.get_param_values("TYPE"), ["work", "internet"]);
}
