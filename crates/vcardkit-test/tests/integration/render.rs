//! Output rendering as the binary does it.

use vcardkit_test::config::OutputFormat;
use vcardkit_test::render::render;
use vcardkit_test::vcard::{parse, parse_file};

#[test_log::test]
fn vcard_output_is_normalized() {
    let path = vcardkit_test::fixtures_dir().join("valid/lf_endings.vcf");
    let cards = parse_file(path).expect("parse fixture");
    let output = render(&cards, OutputFormat::Vcard).expect("render");

    assert_eq!(
        output,
        "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Lower Case\r\nTEL;TYPE=home:+1-555-0199\r\nEND:VCARD\r\n"
    );
    assert_eq!(parse(&output).expect("reparse"), cards);
}

#[test_log::test]
fn json_output_mirrors_cards() {
    let path = vcardkit_test::fixtures_dir().join("valid/multiple.vcf");
    let cards = parse_file(path).expect("parse fixture");
    let output = render(&cards, OutputFormat::Json).expect("render");
    let json: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");

    let list = json.as_array().expect("top-level array");
    assert_eq!(list.len(), 3);
    assert_eq!(list[1]["FN"][0]["value"], "Bob Example");
    assert!(list[2].get("EMAIL").is_none());
}
