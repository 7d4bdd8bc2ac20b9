#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User asked for a new group with the given display name.
    CreateGroup { name: String },
    /// User renamed an existing group.
    RenameGroup { id: crate::GroupId, name: String },
    /// User confirmed deletion of a group (any confirmation prompt happens
    /// host-side, before this message is dispatched).
    DeleteGroup { id: crate::GroupId },
    /// User picked a group from the selector.
    GroupSelected { id: crate::GroupId },
    /// User submitted a URL for the active group.
    UrlSubmitted { url: String },
    /// User removed a URL from the active group.
    UrlRemoved { url: String },
    /// Restore groups from persisted state.
    RestoreGroups(Vec<crate::GroupSnapshot>),
    /// Fallback for placeholder wiring.
    NoOp,
}
