//! Line-oriented front end over the pure core.
//!
//! Owns everything the core refuses to: transient input parsing, the
//! confirmation prompt before a delete, turning rejection kinds into
//! messages, and persisting snapshots after accepted commands.

use std::io::{self, BufRead, StdinLock, Write};
use std::path::Path;

use app_logging::{app_info, app_warn};
use curator_core::{update, Effect, GroupId, GroupStore, Msg};

use crate::persistence;

pub(crate) fn run() -> anyhow::Result<()> {
    let state_dir = std::env::current_dir()?;
    let mut store = load_store(&state_dir);
    store.consume_dirty();

    println!("curator — type `help` for commands");
    render_groups(&store);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let (command, rest) = split_command(input);
        let msg = match command {
            "help" => {
                print_help();
                continue;
            }
            "quit" | "exit" => break,
            "groups" => {
                render_groups(&store);
                continue;
            }
            "urls" => {
                render_urls(&store);
                continue;
            }
            "new" => Msg::CreateGroup {
                name: rest.to_string(),
            },
            "use" => {
                let Some(id) = parse_id(rest) else { continue };
                Msg::GroupSelected { id }
            }
            "rename" => {
                let (id_part, name) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let Some(id) = parse_id(id_part) else { continue };
                Msg::RenameGroup {
                    id,
                    name: name.trim().to_string(),
                }
            }
            "delete" => {
                let Some(id) = parse_id(rest) else { continue };
                if !confirm_delete(&store, id, &mut lines)? {
                    println!("kept group {id}");
                    continue;
                }
                Msg::DeleteGroup { id }
            }
            "add" => Msg::UrlSubmitted {
                url: rest.to_string(),
            },
            "remove" => Msg::UrlRemoved {
                url: rest.to_string(),
            },
            other => {
                println!("unrecognized command {other:?}; type `help`");
                continue;
            }
        };

        let (next, effects) = update(store, msg);
        store = next;
        for effect in &effects {
            report(effect);
        }
        if store.consume_dirty() {
            persistence::save_groups(&state_dir, &store.snapshot());
            render_groups(&store);
        }
    }

    Ok(())
}

fn load_store(state_dir: &Path) -> GroupStore {
    let seeded = GroupStore::new();
    let persisted = persistence::load_groups(state_dir);
    if persisted.is_empty() {
        return seeded;
    }
    let (restored, _effects) = update(seeded, Msg::RestoreGroups(persisted));
    restored
}

/// Asks before dispatching a delete; the core itself never prompts.
///
/// An unknown id is passed through so the core reports `NotFound`.
fn confirm_delete(
    store: &GroupStore,
    id: GroupId,
    lines: &mut io::Lines<StdinLock<'_>>,
) -> anyhow::Result<bool> {
    let Some(group) = store.group(id) else {
        return Ok(true);
    };
    let url_count = store.membership(id).map_or(0, <[String]>::len);
    print!(
        "delete group \"{}\" and its {} URL(s)? [y/N] ",
        group.name, url_count
    );
    io::stdout().flush()?;
    let answer = match lines.next() {
        Some(line) => line?,
        None => return Ok(false),
    };
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn report(effect: &Effect) {
    match effect {
        Effect::GroupCreated { group } => {
            app_info!("Created group id={} name={}", group.id, group.name);
            println!("created group {} ({})", group.id, group.name);
        }
        Effect::GroupRenamed { id } => println!("renamed group {id}"),
        Effect::GroupDeleted { id, was_active } => {
            app_info!("Deleted group id={} was_active={}", id, was_active);
            println!("deleted group {id}");
            if *was_active {
                println!("the active group is gone; pick a new one with `use <id>`");
            }
        }
        Effect::ActiveChanged { id } => println!("now editing group {id}"),
        Effect::MembershipChanged { id } => app_info!("Membership changed for group id={}", id),
        Effect::Rejected(reason) => {
            app_warn!("Command rejected: {}", reason);
            println!("rejected: {reason}");
        }
    }
}

fn render_groups(store: &GroupStore) {
    let view = store.view();
    if view.active_group.is_none() {
        println!("(no active group — use `use <id>`)");
    }
    for row in &view.groups {
        let marker = if view.active_group == Some(row.id) {
            '*'
        } else {
            ' '
        };
        let protection = if row.is_editable { "" } else { " (built-in)" };
        println!(
            "{} {:>3}  {}{}  [{}/{} URLs]",
            marker, row.id, row.name, protection, row.url_count, view.max_urls
        );
    }
}

fn render_urls(store: &GroupStore) {
    let view = store.view();
    if view.active_group.is_none() {
        println!("(no active group — use `use <id>`)");
        return;
    }
    if view.active_urls.is_empty() {
        println!("(no URLs yet — `add <url>`)");
        return;
    }
    for (index, url) in view.active_urls.iter().enumerate() {
        println!("{:>3}. {}", index + 1, url);
    }
}

fn parse_id(input: &str) -> Option<GroupId> {
    match input.trim().parse() {
        Ok(id) => Some(id),
        Err(_) => {
            println!("expected a numeric group id, got {input:?}");
            None
        }
    }
}

fn split_command(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (input, ""),
    }
}

fn print_help() {
    println!("commands:");
    println!("  groups                list groups (* marks the active one)");
    println!("  urls                  list the active group's URLs");
    println!("  new <name>            create a group");
    println!("  rename <id> <name>    rename a group");
    println!("  delete <id>           delete a group (asks first)");
    println!("  use <id>              switch the active group");
    println!("  add <url>             add an absolute URL to the active group");
    println!("  remove <url>          remove a URL from the active group");
    println!("  quit                  exit");
}
