use crate::{CommandError, Effect, GroupId, GroupStore, Msg};

/// Pure update function: applies a message to the store and returns any
/// effects for the host.
///
/// Every accepted command marks the store dirty; every rejection comes back
/// as [`Effect::Rejected`] with the store untouched.
pub fn update(mut store: GroupStore, msg: Msg) -> (GroupStore, Vec<Effect>) {
    let effects = match msg {
        Msg::CreateGroup { name } => match store.create_group(&name) {
            Ok(group) => vec![Effect::GroupCreated { group }],
            Err(reason) => vec![Effect::Rejected(reason)],
        },
        Msg::RenameGroup { id, name } => match store.rename_group(id, &name) {
            Ok(()) => vec![Effect::GroupRenamed { id }],
            Err(reason) => vec![Effect::Rejected(reason)],
        },
        Msg::DeleteGroup { id } => {
            // Capture before the mutation; afterwards the pointer is gone.
            let was_active = store.active_group_id() == Some(id);
            match store.delete_group(id) {
                Ok(()) => vec![Effect::GroupDeleted { id, was_active }],
                Err(reason) => vec![Effect::Rejected(reason)],
            }
        }
        Msg::GroupSelected { id } => match store.set_active_group(id) {
            Ok(()) => vec![Effect::ActiveChanged { id }],
            Err(reason) => vec![Effect::Rejected(reason)],
        },
        Msg::UrlSubmitted { url } => match active_target(&store) {
            Ok(id) => match store.add_url(id, &url) {
                Ok(()) => vec![Effect::MembershipChanged { id }],
                Err(reason) => vec![Effect::Rejected(reason)],
            },
            Err(reason) => vec![Effect::Rejected(reason)],
        },
        Msg::UrlRemoved { url } => match active_target(&store) {
            Ok(id) => match store.remove_url(id, &url) {
                Ok(true) => vec![Effect::MembershipChanged { id }],
                // Removing an absent URL is idempotent; nothing to report.
                Ok(false) => Vec::new(),
                Err(reason) => vec![Effect::Rejected(reason)],
            },
            Err(reason) => vec![Effect::Rejected(reason)],
        },
        Msg::RestoreGroups(snapshots) => {
            store.restore(snapshots);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (store, effects)
}

fn active_target(store: &GroupStore) -> Result<GroupId, CommandError> {
    store
        .active_group_id()
        .ok_or(CommandError::NoActiveGroup)
}
