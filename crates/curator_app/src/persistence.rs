//! RON snapshot of the group store.
//!
//! The core does not own persistence; this host loads the snapshot at
//! startup and saves it after every accepted command.

use std::fs;
use std::io::Write;
use std::path::Path;

use app_logging::{app_error, app_info, app_warn};
use curator_core::GroupSnapshot;
use serde::{Deserialize, Serialize};

const STATE_FILENAME: &str = ".curator_state.ron";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedGroup {
    name: String,
    is_editable: bool,
    urls: Vec<String>,
    is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedState {
    groups: Vec<PersistedGroup>,
}

pub(crate) fn load_groups(state_dir: &Path) -> Vec<GroupSnapshot> {
    let path = state_dir.join(STATE_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Vec::new();
        }
        Err(err) => {
            app_warn!("Failed to read persisted state from {:?}: {}", path, err);
            return Vec::new();
        }
    };

    let state: PersistedState = match ron::from_str(&content) {
        Ok(state) => state,
        Err(err) => {
            app_warn!("Failed to parse persisted state from {:?}: {}", path, err);
            return Vec::new();
        }
    };

    let groups = state
        .groups
        .into_iter()
        .map(|group| GroupSnapshot {
            name: group.name,
            is_editable: group.is_editable,
            urls: group.urls,
            is_active: group.is_active,
        })
        .collect();

    app_info!("Loaded persisted groups from {:?}", path);
    groups
}

pub(crate) fn save_groups(state_dir: &Path, snapshots: &[GroupSnapshot]) {
    let state = PersistedState {
        groups: snapshots
            .iter()
            .map(|group| PersistedGroup {
                name: group.name.clone(),
                is_editable: group.is_editable,
                urls: group.urls.clone(),
                is_active: group.is_active,
            })
            .collect(),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&state, pretty) {
        Ok(text) => text,
        Err(err) => {
            app_error!("Failed to serialize persisted state: {}", err);
            return;
        }
    };

    if let Err(err) = write_atomic(state_dir, STATE_FILENAME, &content) {
        app_error!("Failed to write persisted state to {:?}: {}", state_dir, err);
    }
}

/// Writes through a sibling temp file and renames it into place so a crash
/// mid-write never truncates the previous snapshot.
fn write_atomic(dir: &Path, filename: &str, content: &str) -> std::io::Result<()> {
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(dir.join(filename)).map_err(|err| err.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(name: &str, urls: &[&str], is_active: bool) -> GroupSnapshot {
        GroupSnapshot {
            name: name.to_string(),
            is_editable: true,
            urls: urls.iter().map(ToString::to_string).collect(),
            is_active,
        }
    }

    #[test]
    fn round_trips_groups_through_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let saved = vec![
            snapshot("Docs", &["https://a.example.com"], true),
            snapshot("Work", &[], false),
        ];

        save_groups(dir.path(), &saved);
        let loaded = load_groups(dir.path());

        assert_eq!(loaded, saved);
    }

    #[test]
    fn missing_state_file_loads_as_empty() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(load_groups(dir.path()).is_empty());
    }

    #[test]
    fn corrupt_state_file_loads_as_empty() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join(STATE_FILENAME), "not ron at all {{{").expect("write");

        assert!(load_groups(dir.path()).is_empty());
    }

    #[test]
    fn save_replaces_the_previous_snapshot() {
        let dir = tempfile::tempdir().expect("temp dir");
        save_groups(dir.path(), &[snapshot("Docs", &[], true)]);
        save_groups(dir.path(), &[snapshot("Papers", &[], true)]);

        let loaded = load_groups(dir.path());
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Papers");
    }
}
