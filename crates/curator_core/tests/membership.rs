use std::sync::Once;

use curator_core::{can_add, update, CommandError, Effect, GroupStore, Msg};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(app_logging::initialize_for_tests);
}

fn submit(store: GroupStore, url: &str) -> (GroupStore, Vec<Effect>) {
    update(
        store,
        Msg::UrlSubmitted {
            url: url.to_string(),
        },
    )
}

fn active_urls(store: &GroupStore) -> Vec<String> {
    store.view().active_urls
}

#[test]
fn urls_append_in_submission_order() {
    init_logging();
    let store = GroupStore::new();
    let (store, _effects) = submit(store, "https://b.example.com");
    let (store, _effects) = submit(store, "https://a.example.com");

    assert_eq!(
        active_urls(&store),
        vec![
            "https://b.example.com".to_string(),
            "https://a.example.com".to_string(),
        ]
    );
}

#[test]
fn submitted_urls_are_trimmed_before_storage() {
    init_logging();
    let store = GroupStore::new();
    let (store, _effects) = submit(store, "  https://a.example.com  ");
    assert_eq!(active_urls(&store), vec!["https://a.example.com".to_string()]);

    // The trimmed form is what duplicate detection sees.
    let (store, effects) = submit(store, "https://a.example.com");
    assert_eq!(effects, vec![Effect::Rejected(CommandError::DuplicateUrl)]);
    assert_eq!(active_urls(&store).len(), 1);
}

#[test]
fn capacity_is_enforced_at_the_boundary() {
    init_logging();
    let store = GroupStore::with_max_urls(2);
    let (store, _effects) = submit(store, "https://a.example.com");
    let (store, effects) = submit(store, "https://b.example.com");
    assert!(matches!(effects[0], Effect::MembershipChanged { .. }));

    let (store, effects) = submit(store, "https://c.example.com");
    assert_eq!(
        effects,
        vec![Effect::Rejected(CommandError::CapacityExceeded {
            max_urls: 2
        })]
    );
    assert_eq!(
        active_urls(&store),
        vec![
            "https://a.example.com".to_string(),
            "https://b.example.com".to_string(),
        ]
    );
}

#[test]
fn exact_duplicate_is_rejected() {
    init_logging();
    let store = GroupStore::new();
    let (store, _effects) = submit(store, "https://a.example.com");
    let (store, effects) = submit(store, "https://a.example.com");

    assert_eq!(effects, vec![Effect::Rejected(CommandError::DuplicateUrl)]);
    assert_eq!(active_urls(&store).len(), 1);
}

#[test]
fn near_duplicates_are_distinct_entries() {
    init_logging();
    // Matching is exact string equality: trailing-slash and case variants
    // are deliberately not folded together.
    let store = GroupStore::new();
    let (store, _effects) = submit(store, "https://example.com");
    let (store, _effects) = submit(store, "https://example.com/");
    let (store, _effects) = submit(store, "HTTPS://EXAMPLE.COM");

    assert_eq!(active_urls(&store).len(), 3);
}

#[test]
fn malformed_and_relative_urls_are_rejected() {
    init_logging();
    for bad in ["not-a-url", "example.com", "/docs/page", "//example.com"] {
        let store = GroupStore::new();
        let (store, effects) = submit(store, bad);
        assert_eq!(
            effects,
            vec![Effect::Rejected(CommandError::MalformedUrl)],
            "expected rejection for {bad:?}"
        );
        assert!(active_urls(&store).is_empty());
    }
}

#[test]
fn empty_submission_is_rejected() {
    init_logging();
    let (store, effects) = submit(GroupStore::new(), "   ");

    assert_eq!(effects, vec![Effect::Rejected(CommandError::EmptyInput)]);
    assert!(active_urls(&store).is_empty());
}

#[test]
fn capacity_is_checked_before_duplication() {
    init_logging();
    let current = vec![
        "https://a.example.com".to_string(),
        "https://b.example.com".to_string(),
    ];

    // The list is full AND already contains the URL; capacity wins.
    assert_eq!(
        can_add("https://a.example.com", &current, 2),
        Err(CommandError::CapacityExceeded { max_urls: 2 })
    );
}

#[test]
fn removal_takes_the_first_exact_match_only() {
    init_logging();
    let store = GroupStore::new();
    let (store, _effects) = submit(store, "https://a.example.com");
    let (store, _effects) = submit(store, "https://b.example.com");

    let (store, effects) = update(
        store,
        Msg::UrlRemoved {
            url: "https://a.example.com".to_string(),
        },
    );
    assert!(matches!(effects[0], Effect::MembershipChanged { .. }));
    assert_eq!(active_urls(&store), vec!["https://b.example.com".to_string()]);

    // Case variant does not match.
    let (store, effects) = update(
        store,
        Msg::UrlRemoved {
            url: "HTTPS://B.EXAMPLE.COM".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(active_urls(&store), vec!["https://b.example.com".to_string()]);
}

#[test]
fn removal_is_idempotent() {
    init_logging();
    let store = GroupStore::new();
    let (store, _effects) = submit(store, "https://a.example.com");

    let remove = |store| {
        update(
            store,
            Msg::UrlRemoved {
                url: "https://a.example.com".to_string(),
            },
        )
    };
    let (mut store, effects) = remove(store);
    assert!(matches!(effects[0], Effect::MembershipChanged { .. }));
    assert!(active_urls(&store).is_empty());
    assert!(store.consume_dirty());

    let (mut store, effects) = remove(store);
    assert!(effects.is_empty());
    assert!(active_urls(&store).is_empty());
    assert!(!store.consume_dirty());
}

#[test]
fn membership_is_scoped_per_group() {
    init_logging();
    let store = GroupStore::new();
    let builtin = store.groups()[0].id;
    let (store, effects) = update(
        store,
        Msg::CreateGroup {
            name: "Docs".to_string(),
        },
    );
    let docs = match &effects[0] {
        Effect::GroupCreated { group } => group.id,
        other => panic!("unexpected effect: {other:?}"),
    };

    let (store, _effects) = submit(store, "https://a.example.com");
    let (store, _effects) = update(store, Msg::GroupSelected { id: docs });
    // Same URL in a different group is fine; uniqueness is per group.
    let (store, effects) = submit(store, "https://a.example.com");

    assert!(matches!(effects[0], Effect::MembershipChanged { .. }));
    assert_eq!(store.membership(builtin).unwrap().len(), 1);
    assert_eq!(store.membership(docs).unwrap().len(), 1);
}
