use crate::error::CommandError;
use crate::state::{GroupId, UrlGroup};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    GroupCreated { group: UrlGroup },
    GroupRenamed { id: GroupId },
    /// `was_active` tells the host it must select a new active group before
    /// further URL operations will be accepted.
    GroupDeleted { id: GroupId, was_active: bool },
    ActiveChanged { id: GroupId },
    MembershipChanged { id: GroupId },
    /// A command was refused; the store is unchanged and the host should
    /// surface the reason to the user.
    Rejected(CommandError),
}
