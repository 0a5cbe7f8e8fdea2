use ridkit_core::Identifier;
use std::str::FromStr;

// ------------------------------------------------------------------------------------------------
// API Tests
// ------------------------------------------------------------------------------------------------

#[test]
fn test_parse_iri_simple_url() {
    let result = Identifier::from_str(
        "https://john.doe@www.example.com:123/forum/questions/?tag=networking&order=newest#top",
    );
    assert!(result.is_ok());
    let result = result.unwrap();
    println!("{:#?}", result);
    assert_eq!(result.scheme(), Some("https"));
    assert_eq!(result.host(), Some("www.example.com"));
    assert_eq!(result.port(), Some("123"));
    assert_eq!(result.path(), Some("/forum/questions/"));
    assert_eq!(result.query(), Some("tag=networking&order=newest"));
    assert_eq!(result.fragment(), Some("top"));
}

#[test]
fn test_parse_ldap_iri() {
    let result = Identifier::from_str("ldap://[2001:db8::7]/c=GB?objectClass?one");
    assert!(result.is_ok());
    let result = result.unwrap();
    println!("{:#?}", result);
    assert_eq!(result.scheme(), Some("ldap"));
    assert_eq!(result.host(), Some("[2001:db8::7]"));
}

#[test]
fn test_parse_mailto_iri() {
    let result = Identifier::from_str("mailto:John.Doe@example.com");
    assert!(result.is_ok());
    let result = result.unwrap();
    println!("{:#?}", result);
    assert_eq!(result.scheme(), Some("mailto"));
    assert_eq!(result.authority(), None);
    assert_eq!(result.path(), Some("John.Doe@example.com"));
    assert_eq!(result.fragment(), None);
}

#[test]
fn test_parse_usenet_iri() {
    let result = Identifier::from_str("news:comp.infosystems.www.servers.unix");
    assert!(result.is_ok());
    let result = result.unwrap();
    println!("{:#?}", result);
    assert_eq!(result.scheme(), Some("news"));
    assert_eq!(result.authority(), None);
    assert_eq!(result.path(), Some("comp.infosystems.www.servers.unix"));
    assert_eq!(result.fragment(), None);
}

#[test]
fn test_parse_tel_iri() {
    let result = Identifier::from_str("tel:+1-816-555-1212");
    assert!(result.is_ok());
    let result = result.unwrap();
    println!("{:#?}", result);
    assert_eq!(result.scheme(), Some("tel"));
    assert_eq!(result.authority(), None);
    assert_eq!(result.path(), Some("+1-816-555-1212"));
    assert_eq!(result.fragment(), None);
}

#[test]
fn test_parse_telnet_iri() {
    let result = Identifier::from_str("telnet://192.0.2.16:80/");
    assert!(result.is_ok());
    let result = result.unwrap();
    println!("{:#?}", result);
    assert_eq!(result.scheme(), Some("telnet"));
    assert_eq!(result.host(), Some("192.0.2.16"));
    assert_eq!(result.port(), Some("80"));
    assert_eq!(result.path(), Some("/"));
    assert_eq!(result.fragment(), None);
}

#[test]
fn test_parse_urn_iri() {
    let result = Identifier::from_str("urn:oasis:names:specification:docbook:dtd:xml:4.1.2");
    assert!(result.is_ok());
    let result = result.unwrap();
    println!("{:#?}", result);
    assert_eq!(result.scheme(), Some("urn"));
    assert_eq!(result.authority(), None);
    assert_eq!(
        result.path(),
        Some("oasis:names:specification:docbook:dtd:xml:4.1.2")
    );
    assert_eq!(result.fragment(), None);
}

#[test]
fn test_parse_iri_i18n_path() {
    let result = Identifier::from_str("https://en.wiktionary.org/wiki/Ῥόδος");
    assert!(result.is_ok());
    let result = result.unwrap();
    println!("{:#?}", result);
    assert_eq!(result.scheme(), Some("https"));
    assert_eq!(result.host(), Some("en.wiktionary.org"));
    assert_eq!(result.port(), None);
    assert_eq!(result.path(), Some("/wiki/Ῥόδος"));
    assert_eq!(result.fragment(), None);
}

#[test]
fn test_parse_iri_i18n_host() {
    let result = Identifier::from_str("http://www.myfictionαlbank.com/");
    assert!(result.is_ok());
    let result = result.unwrap();
    println!("{:#?}", result);
    assert_eq!(result.scheme(), Some("http"));
    assert_eq!(result.host(), Some("www.myfictionαlbank.com"));
    assert_eq!(result.port(), None);
    assert_eq!(result.path(), Some("/"));
    assert_eq!(result.fragment(), None);
}
