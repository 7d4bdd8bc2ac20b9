use curator_core::{update, GroupStore, Msg};

#[test]
fn update_is_noop() {
    let store = GroupStore::new();
    let (next, effects) = update(store.clone(), Msg::NoOp);

    assert_eq!(store, next);
    assert!(effects.is_empty());
}
