use folio_subdomain::{
    validation::{
        full_subdomain_name, is_valid_subdomain, is_valid_subdomain_label, validate_candidate,
        validate_label, validate_subdomain,
    },
    ModalConfig, NameRules, SubdomainError,
};

#[test]
fn test_valid_labels() {
    let longest = "a".repeat(63);
    for label in ["alice", "a", "0x1", "my-site", longest.as_str()] {
        assert!(is_valid_subdomain_label(label), "{label} should be valid");
    }
}

#[test]
fn test_invalid_labels() {
    let rules = NameRules::default();
    assert_eq!(validate_label("", &rules), Err(SubdomainError::Empty));
    assert_eq!(
        validate_label("-bad-", &rules),
        Err(SubdomainError::LeadingHyphen("-bad-".to_string()))
    );
    assert_eq!(
        validate_label("bad-", &rules),
        Err(SubdomainError::TrailingHyphen("bad-".to_string()))
    );
    assert_eq!(
        validate_label("Alice", &rules),
        Err(SubdomainError::InvalidCharacter {
            label: "Alice".to_string(),
            ch: 'A'
        })
    );
    assert!(matches!(
        validate_label(&"a".repeat(64), &rules),
        Err(SubdomainError::TooLong(_))
    ));
    assert!(!is_valid_subdomain_label("a b"));
    assert!(!is_valid_subdomain_label("café"));
    assert!(!is_valid_subdomain_label("a_b"));
}

#[test]
fn test_full_subdomain_names() {
    let rules = NameRules::default();
    assert_eq!(full_subdomain_name("alice", "example"), "alice.example");
    assert!(is_valid_subdomain("alice.example", &rules));
    assert!(is_valid_subdomain("dev.alice.example", &rules));

    assert_eq!(validate_subdomain("", &rules), Err(SubdomainError::Empty));
    assert_eq!(
        validate_subdomain("example", &rules),
        Err(SubdomainError::MissingParent("example".to_string()))
    );
    assert_eq!(validate_subdomain(".example", &rules), Err(SubdomainError::Empty));
    assert_eq!(
        validate_subdomain("-bad-.example", &rules),
        Err(SubdomainError::LeadingHyphen("-bad-".to_string()))
    );
    assert!(!is_valid_subdomain("alice..example", &rules));
}

#[test]
fn test_candidate_must_be_single_label() {
    let rules = NameRules::default();
    assert_eq!(validate_candidate("alice", "example", &rules), Ok(()));
    assert!(matches!(
        validate_candidate("a.b", "example", &rules),
        Err(SubdomainError::InvalidCharacter { ch: '.', .. })
    ));
    assert_eq!(
        validate_candidate("", "example", &rules),
        Err(SubdomainError::Empty)
    );
    assert_eq!(
        validate_candidate("alice", "", &rules),
        Err(SubdomainError::Empty)
    );
}

#[test]
fn test_name_length_counts_tld() {
    let rules = NameRules {
        max_name_length: 17,
        ..NameRules::default()
    };
    // "alice.example.sol" is exactly 17 bytes
    assert!(is_valid_subdomain("alice.example", &rules));
    assert_eq!(
        validate_subdomain("alices.example", &rules),
        Err(SubdomainError::NameTooLong("alices.example".to_string()))
    );
}

#[test]
fn test_config_from_json() {
    let config = ModalConfig::from_json(
        r#"{ "rules": { "tld": "folio", "max_label_length": 32 }, "log_filter": "debug" }"#,
    )
    .unwrap();
    assert_eq!(config.rules.tld, "folio");
    assert_eq!(config.rules.max_label_length, 32);
    assert_eq!(config.rules.max_name_length, 253);
    assert_eq!(config.log_filter.as_deref(), Some("debug"));

    assert_eq!(ModalConfig::from_json("{}").unwrap(), ModalConfig::default());
}

#[test]
fn test_config_rejects_bad_values() {
    assert!(matches!(
        ModalConfig::from_json(r#"{ "rules": { "tld": "" } }"#),
        Err(SubdomainError::InvalidConfig(_))
    ));
    assert!(matches!(
        ModalConfig::from_json(r#"{ "rules": { "tld": "a.b" } }"#),
        Err(SubdomainError::InvalidConfig(_))
    ));
    assert!(matches!(
        ModalConfig::from_json(r#"{ "rules": { "max_label_length": 0 } }"#),
        Err(SubdomainError::InvalidConfig(_))
    ));
    assert!(matches!(
        ModalConfig::from_json("not json"),
        Err(SubdomainError::InvalidConfig(_))
    ));
}
