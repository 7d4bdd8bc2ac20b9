//! Curator core: pure group/membership state machine and view-model helpers.
mod effect;
mod error;
mod msg;
mod state;
mod update;
mod validate;
mod view_model;

pub use effect::Effect;
pub use error::CommandError;
pub use msg::Msg;
pub use state::{GroupId, GroupSnapshot, GroupStore, UrlGroup, DEFAULT_MAX_URLS};
pub use update::update;
pub use validate::{can_add, remove};
pub use view_model::{AppViewModel, GroupRowView};
