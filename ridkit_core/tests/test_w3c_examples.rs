use ridkit_core::Identifier;
use std::str::FromStr;

#[test]
pub fn from_ntriple_suite() {
    let result = Identifier::from_str(
        "scheme:!$%25&'()*+,-./0123456789:/@ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz~?#",
    );
    println!("{:?}", result);
    assert!(result.is_ok());
}
