use std::collections::BTreeMap;

use crate::error::CommandError;
use crate::validate;
use crate::view_model::{AppViewModel, GroupRowView};

/// Opaque group identifier, stable for the group's lifetime.
pub type GroupId = u64;

/// Per-group URL capacity used by [`GroupStore::new`].
pub const DEFAULT_MAX_URLS: usize = 20;

const BUILTIN_GROUP_NAME: &str = "Default";

/// A named collection of reference URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlGroup {
    pub id: GroupId,
    pub name: String,
    /// `false` marks a built-in group whose name and existence are protected.
    pub is_editable: bool,
}

/// Persistable image of one group, used to restore a store across sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSnapshot {
    pub name: String,
    pub is_editable: bool,
    pub urls: Vec<String>,
    pub is_active: bool,
}

/// Authoritative owner of the URL groups, their memberships, and the
/// active-group pointer.
///
/// Invariants enforced on every mutation:
/// - at least one group always exists;
/// - the active pointer, when set, references an existing group (deleting
///   the active group leaves it dangling until the host selects a new one);
/// - a membership list holds no duplicate URL string and never grows past
///   `max_urls`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupStore {
    groups: Vec<UrlGroup>,
    memberships: BTreeMap<GroupId, Vec<String>>,
    active: Option<GroupId>,
    next_id: GroupId,
    max_urls: usize,
    dirty: bool,
}

impl Default for GroupStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupStore {
    /// Creates a store seeded with the built-in group, which starts active.
    pub fn new() -> Self {
        Self::with_max_urls(DEFAULT_MAX_URLS)
    }

    /// Same as [`GroupStore::new`] with a custom per-group URL capacity.
    pub fn with_max_urls(max_urls: usize) -> Self {
        let builtin = UrlGroup {
            id: 1,
            name: BUILTIN_GROUP_NAME.to_string(),
            is_editable: false,
        };
        let mut memberships = BTreeMap::new();
        memberships.insert(builtin.id, Vec::new());
        Self {
            active: Some(builtin.id),
            next_id: builtin.id + 1,
            groups: vec![builtin],
            memberships,
            max_urls,
            dirty: false,
        }
    }

    /// Appends a fresh editable group with an empty membership list.
    ///
    /// Does not change the active group; activation is the caller's call.
    pub fn create_group(&mut self, name: &str) -> Result<UrlGroup, CommandError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CommandError::InvalidName);
        }
        let group = UrlGroup {
            id: self.next_id,
            name: name.to_string(),
            is_editable: true,
        };
        self.next_id += 1;
        self.memberships.insert(group.id, Vec::new());
        self.groups.push(group.clone());
        self.mark_dirty();
        Ok(group)
    }

    /// Renames a group in place; id and membership are untouched.
    pub fn rename_group(&mut self, id: GroupId, new_name: &str) -> Result<(), CommandError> {
        let position = self.position(id)?;
        if !self.groups[position].is_editable {
            return Err(CommandError::NotEditable);
        }
        let name = new_name.trim();
        if name.is_empty() {
            return Err(CommandError::InvalidName);
        }
        self.groups[position].name = name.to_string();
        self.mark_dirty();
        Ok(())
    }

    /// Removes a group and its membership list.
    ///
    /// If the removed group was active, the pointer is deliberately left
    /// dangling; URL operations are refused until the host calls
    /// [`GroupStore::set_active_group`].
    pub fn delete_group(&mut self, id: GroupId) -> Result<(), CommandError> {
        let position = self.position(id)?;
        if !self.groups[position].is_editable {
            return Err(CommandError::NotEditable);
        }
        if self.groups.len() == 1 {
            return Err(CommandError::LastGroup);
        }
        self.groups.remove(position);
        self.memberships.remove(&id);
        if self.active == Some(id) {
            self.active = None;
        }
        self.mark_dirty();
        Ok(())
    }

    /// Moves the active pointer; no other state changes.
    pub fn set_active_group(&mut self, id: GroupId) -> Result<(), CommandError> {
        self.position(id)?;
        self.active = Some(id);
        self.mark_dirty();
        Ok(())
    }

    /// Validates and appends a URL to the group's membership list.
    ///
    /// The input is trimmed once here so stored entries never carry stray
    /// whitespace; beyond that, URLs are kept verbatim.
    pub fn add_url(&mut self, id: GroupId, url: &str) -> Result<(), CommandError> {
        let current = self
            .memberships
            .get(&id)
            .ok_or(CommandError::NotFound(id))?;
        let url = url.trim();
        validate::can_add(url, current, self.max_urls)?;
        self.memberships
            .get_mut(&id)
            .ok_or(CommandError::NotFound(id))?
            .push(url.to_string());
        self.mark_dirty();
        Ok(())
    }

    /// Removes the first exact match of `url` from the group's list.
    ///
    /// Returns whether anything was removed; removing an absent URL is an
    /// idempotent no-op, not an error.
    pub fn remove_url(&mut self, id: GroupId, url: &str) -> Result<bool, CommandError> {
        let current = self
            .memberships
            .get_mut(&id)
            .ok_or(CommandError::NotFound(id))?;
        let next = validate::remove(url.trim(), current);
        let removed = next.len() != current.len();
        if removed {
            *current = next;
            self.mark_dirty();
        }
        Ok(removed)
    }

    /// Replaces the store's contents with persisted groups.
    ///
    /// Snapshots are re-validated on the way in so a hand-edited state file
    /// cannot smuggle duplicates or overflow past capacity. If nothing in
    /// the snapshot survives validation, the store is left untouched.
    pub fn restore(&mut self, snapshots: Vec<GroupSnapshot>) {
        let mut groups = Vec::new();
        let mut memberships = BTreeMap::new();
        let mut active = None;
        let mut next_id: GroupId = 1;

        for snapshot in snapshots {
            let name = snapshot.name.trim();
            if name.is_empty() {
                continue;
            }
            let id = next_id;
            next_id += 1;
            let mut urls: Vec<String> = Vec::new();
            for url in &snapshot.urls {
                if validate::can_add(url.trim(), &urls, self.max_urls).is_ok() {
                    urls.push(url.trim().to_string());
                }
            }
            groups.push(UrlGroup {
                id,
                name: name.to_string(),
                is_editable: snapshot.is_editable,
            });
            memberships.insert(id, urls);
            if snapshot.is_active && active.is_none() {
                active = Some(id);
            }
        }

        if groups.is_empty() {
            return;
        }
        // A fresh session needs a usable active pointer; fall back to the
        // first restored group when none was marked.
        if active.is_none() {
            active = groups.first().map(|group| group.id);
        }
        self.groups = groups;
        self.memberships = memberships;
        self.active = active;
        self.next_id = next_id;
        self.mark_dirty();
    }

    /// Persistable image of the whole store, in group order.
    pub fn snapshot(&self) -> Vec<GroupSnapshot> {
        self.groups
            .iter()
            .map(|group| GroupSnapshot {
                name: group.name.clone(),
                is_editable: group.is_editable,
                urls: self
                    .memberships
                    .get(&group.id)
                    .cloned()
                    .unwrap_or_default(),
                is_active: self.active == Some(group.id),
            })
            .collect()
    }

    pub fn groups(&self) -> &[UrlGroup] {
        &self.groups
    }

    pub fn group(&self, id: GroupId) -> Option<&UrlGroup> {
        self.groups.iter().find(|group| group.id == id)
    }

    /// `None` while the pointer is dangling after deleting the active group.
    pub fn active_group_id(&self) -> Option<GroupId> {
        self.active
    }

    /// Membership list in insertion order.
    pub fn membership(&self, id: GroupId) -> Option<&[String]> {
        self.memberships.get(&id).map(Vec::as_slice)
    }

    pub fn max_urls(&self) -> usize {
        self.max_urls
    }

    /// Render snapshot for the presentation layer.
    pub fn view(&self) -> AppViewModel {
        let groups = self
            .groups
            .iter()
            .map(|group| GroupRowView {
                id: group.id,
                name: group.name.clone(),
                is_editable: group.is_editable,
                url_count: self.memberships.get(&group.id).map_or(0, Vec::len),
            })
            .collect();
        let active_urls = self
            .active
            .and_then(|id| self.memberships.get(&id))
            .cloned()
            .unwrap_or_default();
        AppViewModel {
            groups,
            active_group: self.active,
            active_urls,
            max_urls: self.max_urls,
            dirty: self.dirty,
        }
    }

    /// Returns and clears the dirty flag; the host re-renders when true.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn position(&self, id: GroupId) -> Result<usize, CommandError> {
        self.groups
            .iter()
            .position(|group| group.id == id)
            .ok_or(CommandError::NotFound(id))
    }
}
