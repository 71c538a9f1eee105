//! Every negative fixture is rejected with the error kind its table names.

use vcardkit_test::vcard::parse_file;
use vcardkit_test::{load_negative_table, vcf_fixtures};
use vcardkit_rfc::error::RfcError;

#[test_log::test]
fn negative_fixtures_fail_with_expected_kind() {
    let table = load_negative_table().expect("load expected errors");
    let fixtures = vcf_fixtures("negative").expect("list negative fixtures");
    assert_eq!(fixtures.len(), table.len(), "every fixture needs an entry");

    for path in fixtures {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .expect("utf-8 file name")
            .to_string();
        let expected = table
            .get(&file_name)
            .unwrap_or_else(|| panic!("{file_name}: no expected error"));

        match parse_file(&path) {
            Ok(cards) => panic!("{file_name}: parsed {} card(s)", cards.len()),
            Err(RfcError::Parse(err)) => {
                tracing::debug!(fixture = %file_name, error = %err, "Rejected as expected");
                assert_eq!(&format!("{:?}", err.kind), expected, "{file_name}: {err}");
            }
            Err(other) => panic!("{file_name}: unexpected error {other}"),
        }
    }
}

#[test_log::test]
fn unsupported_version_message_names_version() {
    let path = vcardkit_test::fixtures_dir().join("negative/unsupported_version.vcf");
    let Err(RfcError::Parse(err)) = parse_file(path) else {
        panic!("expected a parse error");
    };
    assert!(err.to_string().contains("3.0"));
    assert_eq!(err.line, 2);
}
