//! Input validation helpers

/// Check an email against the minimal `local@domain.tld` shape
///
/// Deliberately loose: no whitespace anywhere, at least one character
/// before the `@`, and the domain must contain a dot with characters on
/// both sides. Full RFC validation is out of scope for this panel.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some(at) = email.find('@') else {
        return false;
    };
    let local = &email[..at];
    let domain = &email[at + 1..];

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot + 1 < domain.len(),
        None => false,
    }
}
