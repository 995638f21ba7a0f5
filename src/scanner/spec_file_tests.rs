use std::path::Path;

use super::*;

#[test]
fn spec_number_parses_two_digit_prefix() {
    let number = SpecNumber::from_file_name("07-auth.spec.md").unwrap();
    assert_eq!(number.as_str(), "07");
    assert_eq!(number.value(), 7);
}

#[test]
fn spec_number_rejects_other_prefixes() {
    assert!(SpecNumber::from_file_name("7-auth.spec.md").is_none());
    assert!(SpecNumber::from_file_name("123-auth.spec.md").is_none());
    assert!(SpecNumber::from_file_name("ab-auth.spec.md").is_none());
    assert!(SpecNumber::from_file_name("invalid-format.spec.md").is_none());
    assert!(SpecNumber::from_file_name("07auth.spec.md").is_none());
}

#[test]
fn spec_number_accepts_empty_descriptive_part() {
    let number = SpecNumber::from_file_name("01-.spec.md").unwrap();
    assert_eq!(number.as_str(), "01");
}

#[test]
fn spec_number_from_value_is_zero_padded() {
    assert_eq!(SpecNumber::from_value(2).as_str(), "02");
    assert_eq!(SpecNumber::from_value(42).to_string(), "42");
}

#[test]
fn spec_numbers_order_as_strings() {
    let mut numbers = vec![
        SpecNumber::from_value(10),
        SpecNumber::from_value(2),
        SpecNumber::from_value(0),
    ];
    numbers.sort();
    let ordered: Vec<_> = numbers.iter().map(SpecNumber::as_str).collect();
    assert_eq!(ordered, vec!["00", "02", "10"]);
}

#[test]
fn label_splits_number_and_name() {
    let label = SpecLabel::from_path(Path::new("/specs/02-init-command.spec.md"));
    assert_eq!(label.number, "02");
    assert_eq!(label.name, "init-command");
}

#[test]
fn label_without_number_has_empty_sort_key() {
    let label = SpecLabel::from_path(Path::new("/specs/template-default.spec.md"));
    assert_eq!(label.number, "");
    assert_eq!(label.name, "template-default");
}

#[test]
fn label_keeps_raw_leading_digits() {
    let label = SpecLabel::from_path(Path::new("/specs/123-big.spec.md"));
    assert_eq!(label.number, "123");
    assert_eq!(label.name, "big");
}

#[test]
fn file_name_of_root_is_empty() {
    assert_eq!(file_name(Path::new("/")), "");
    assert_eq!(file_name(Path::new("a/b.spec.md")), "b.spec.md");
}
