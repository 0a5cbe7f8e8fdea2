use ridkit_core::Identifier;
use std::str::FromStr;

pub fn parse_success(s: &str) {
    println!("> parse_success({:?})", s);
    let result = Identifier::from_str(s);
    assert!(result.is_ok());
    let id = result.unwrap();
    assert_eq!(id.to_string(), id.to_string());
}

pub fn parse_failure(s: &str) {
    println!("> parse_failure({:?})", s);
    let result = Identifier::from_str(s);
    assert!(result.is_err());
}

pub fn parse_and_compare(s: &str, compare_to: &str) {
    println!("> parse_and_compare({:?} == {:?})", s, compare_to);
    let id = Identifier::from_str(s).unwrap();
    assert_eq!(id.to_string(), compare_to.to_string());
}

pub fn normalize_and_compare(s: &str, compare_to: &str) {
    println!("> normalize_and_compare({:?} == {:?})", s, compare_to);
    let id = Identifier::from_str(s).unwrap();
    assert_eq!(id.normalized(), compare_to);
}
