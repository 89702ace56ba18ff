use url::Url;

/// Minimal `local@domain.tld` shape check: no whitespace, exactly one `@`,
/// non-empty local part, and a domain with non-empty segments around the
/// last dot. Deliberately looser than full RFC 5322 validation.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((head, tail)) => !head.is_empty() && !tail.is_empty(),
        None => false,
    }
}

/// A submission link must be a well-formed absolute URL with a host.
pub fn is_valid_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => url.has_host(),
        Err(_) => false,
    }
}
