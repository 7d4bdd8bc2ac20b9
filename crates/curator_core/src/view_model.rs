use crate::state::GroupId;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub groups: Vec<GroupRowView>,
    pub active_group: Option<GroupId>,
    /// URLs of the active group in insertion order; empty while the active
    /// pointer is dangling.
    pub active_urls: Vec<String>,
    pub max_urls: usize,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRowView {
    pub id: GroupId,
    pub name: String,
    pub is_editable: bool,
    pub url_count: usize,
}
