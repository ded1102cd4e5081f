use crate::{config::NameRules, error::SubdomainError};

pub fn validate_label(label: &str, rules: &NameRules) -> Result<(), SubdomainError> {
    if label.is_empty() {
        return Err(SubdomainError::Empty);
    }
    if label.len() > rules.max_label_length {
        return Err(SubdomainError::TooLong(label.to_string()));
    }
    if let Some(ch) = label
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        return Err(SubdomainError::InvalidCharacter {
            label: label.to_string(),
            ch,
        });
    }
    if label.starts_with('-') {
        return Err(SubdomainError::LeadingHyphen(label.to_string()));
    }
    if label.ends_with('-') {
        return Err(SubdomainError::TrailingHyphen(label.to_string()));
    }
    Ok(())
}

/// Checks a full `<sub>.<parent>` name, tld excluded.
pub fn validate_subdomain(name: &str, rules: &NameRules) -> Result<(), SubdomainError> {
    if name.is_empty() {
        return Err(SubdomainError::Empty);
    }
    // name + "." + tld
    if name.len() + 1 + rules.tld.len() > rules.max_name_length {
        return Err(SubdomainError::NameTooLong(name.to_string()));
    }

    let labels: Vec<&str> = name.split('.').collect();
    if labels.len() < 2 {
        return Err(SubdomainError::MissingParent(name.to_string()));
    }
    for label in labels {
        validate_label(label, rules)?;
    }
    Ok(())
}

/// Checks what the user typed: a single label that forms a valid name under `parent_domain`.
pub fn validate_candidate(
    candidate: &str,
    parent_domain: &str,
    rules: &NameRules,
) -> Result<(), SubdomainError> {
    validate_label(candidate, rules)?;
    validate_subdomain(&full_subdomain_name(candidate, parent_domain), rules)
}

pub fn is_valid_subdomain_label(label: &str) -> bool {
    validate_label(label, &NameRules::default()).is_ok()
}

pub fn is_valid_subdomain(name: &str, rules: &NameRules) -> bool {
    validate_subdomain(name, rules).is_ok()
}

pub fn full_subdomain_name(candidate: &str, parent_domain: &str) -> String {
    format!("{candidate}.{parent_domain}")
}
