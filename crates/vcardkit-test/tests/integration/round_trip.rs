//! `parse(serialize(parse(file)))` keeps every property, value and parameter.

use vcardkit_test::vcard::{parse, parse_file, serialize, write_file};
use vcardkit_test::vcf_fixtures;

#[test_log::test]
fn valid_fixtures_round_trip() {
    for path in vcf_fixtures("valid").expect("list valid fixtures") {
        let cards = parse_file(&path).expect("parse fixture");
        let text = serialize(&cards);
        let again = parse(&text).unwrap_or_else(|e| panic!("{}: {e}\n{text}", path.display()));

        assert_eq!(cards, again, "{}", path.display());
        assert!(text.split("\r\n").all(|line| line.len() <= 75));
    }
}

#[test_log::test]
fn write_file_then_parse_file() {
    let source = vcardkit_test::fixtures_dir().join("valid/rfc6350_author.vcf");
    let cards = parse_file(&source).expect("parse fixture");

    let target = std::env::temp_dir().join(format!("vcardkit-it-{}.vcf", std::process::id()));
    write_file(&target, &cards).expect("write file");
    let again = parse_file(&target).expect("parse written file");
    std::fs::remove_file(&target).expect("remove temp file");

    assert_eq!(cards, again);
}
