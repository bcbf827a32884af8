//! Format checks for string fields.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$",
    )
    .expect("email pattern compiles")
});

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^https?://[a-z0-9](?:[a-z0-9-]*[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]*[a-z0-9])?)*(?::\d{1,5})?(?:[/?#]\S*)?$")
        .expect("url pattern compiles")
});

/// Returns true if `s` looks like an email address: `local@domain.tld`, no whitespace.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// Returns true if `s` is an absolute http or https URL with a host.
pub fn is_valid_url(s: &str) -> bool {
    URL_RE.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("jane@x.com"));
        assert!(is_valid_email("first.last+cv@mail.example.co.uk"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("jane@localhost"));
        assert!(!is_valid_email("jane doe@x.com"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("jane@@x.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_valid_urls() {
        assert!(is_valid_url("https://janedoe.dev"));
        assert!(is_valid_url("http://localhost:8080/cv"));
        assert!(is_valid_url("https://www.linkedin.com/in/jane-doe"));
        assert!(is_valid_url("HTTPS://GITHUB.COM/jane?tab=repos"));
    }

    #[test]
    fn test_invalid_urls() {
        assert!(!is_valid_url("janedoe.dev"));
        assert!(!is_valid_url("ftp://janedoe.dev"));
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url("https://jane doe.dev"));
    }
}
