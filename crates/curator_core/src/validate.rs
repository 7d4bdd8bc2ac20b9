//! Pure membership validation: decides whether a URL may join a group's
//! list, without mutating anything.

use url::Url;

use crate::error::CommandError;

/// Checks whether `url` may be appended to `current`.
///
/// Checks run in a fixed order so the caller always sees the most specific
/// rejection: empty input, malformedness, capacity, then duplication.
pub fn can_add(url: &str, current: &[String], max_urls: usize) -> Result<(), CommandError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(CommandError::EmptyInput);
    }
    // Absolute URL with a scheme; relative or schemeless strings fail to
    // parse without a base and are rejected.
    if Url::parse(trimmed).is_err() {
        return Err(CommandError::MalformedUrl);
    }
    if current.len() >= max_urls {
        return Err(CommandError::CapacityExceeded { max_urls });
    }
    // Exact string match only: "https://a.com" and "https://a.com/" are
    // distinct entries on purpose.
    if current.iter().any(|existing| existing == trimmed) {
        return Err(CommandError::DuplicateUrl);
    }
    Ok(())
}

/// Returns `current` with the first exact match of `url` removed.
///
/// Removing an absent URL is not an error; the list comes back unchanged.
pub fn remove(url: &str, current: &[String]) -> Vec<String> {
    let mut next = current.to_vec();
    if let Some(position) = next.iter().position(|existing| existing == url) {
        next.remove(position);
    }
    next
}
