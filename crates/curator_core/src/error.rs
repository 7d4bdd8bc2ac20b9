use thiserror::Error;

use crate::state::GroupId;

/// Reasons a command against the group store can be rejected.
///
/// Every rejection is all-or-nothing: the store is left exactly as it was.
/// The host decides how to present the reason to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Group names must be non-empty after trimming.
    #[error("group name must not be empty")]
    InvalidName,
    /// The referenced group does not exist.
    #[error("no group with id {0}")]
    NotFound(GroupId),
    /// Built-in groups cannot be renamed or deleted.
    #[error("this group is built in and cannot be changed")]
    NotEditable,
    /// The last remaining group must survive.
    #[error("the last remaining group cannot be deleted")]
    LastGroup,
    /// A URL operation was issued while no group is active.
    #[error("no active group; select one first")]
    NoActiveGroup,
    /// The submitted URL was empty after trimming.
    #[error("URL must not be empty")]
    EmptyInput,
    /// The submitted string is not an absolute URL with a scheme.
    #[error("not an absolute URL")]
    MalformedUrl,
    /// The group already holds its maximum number of URLs.
    #[error("group is full ({max_urls} URLs)")]
    CapacityExceeded {
        /// Capacity the store was configured with.
        max_urls: usize,
    },
    /// The exact URL string is already in the group.
    #[error("URL is already in this group")]
    DuplicateUrl,
}
