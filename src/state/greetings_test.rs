use super::*;

fn greeting(id: i64, message: &str) -> Greeting {
    Greeting { id, message: message.to_owned(), author: "alice".to_owned(), company: "acme".to_owned() }
}

#[test]
fn greetings_state_default_empty() {
    let state = GreetingsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
}

#[test]
fn finish_latest_load_replaces_items() {
    let mut state = GreetingsState::default();
    state.append(greeting(1, "old"));
    let seq = state.begin_load();
    assert!(state.loading);
    assert!(state.finish_load(seq, vec![greeting(2, "a"), greeting(3, "b")]));
    assert!(!state.loading);
    assert_eq!(state.items.iter().map(|g| g.id).collect::<Vec<_>>(), vec![2, 3]);
}

#[test]
fn stale_load_does_not_overwrite_newer_one() {
    let mut state = GreetingsState::default();
    let first = state.begin_load();
    let second = state.begin_load();

    assert!(state.finish_load(second, vec![greeting(2, "fresh")]));
    assert!(!state.finish_load(first, vec![greeting(1, "stale")]));
    assert_eq!(state.items, vec![greeting(2, "fresh")]);
}

#[test]
fn stale_load_arriving_first_is_dropped_and_keeps_loading() {
    let mut state = GreetingsState::default();
    let first = state.begin_load();
    let _second = state.begin_load();
    assert!(!state.finish_load(first, vec![greeting(1, "stale")]));
    assert!(state.items.is_empty());
    assert!(state.loading);
}

#[test]
fn abandon_latest_load_clears_loading_only() {
    let mut state = GreetingsState::default();
    state.append(greeting(1, "kept"));
    let seq = state.begin_load();
    state.abandon_load(seq);
    assert!(!state.loading);
    assert_eq!(state.items, vec![greeting(1, "kept")]);
}

#[test]
fn abandon_stale_load_keeps_loading() {
    let mut state = GreetingsState::default();
    let first = state.begin_load();
    let _second = state.begin_load();
    state.abandon_load(first);
    assert!(state.loading);
}

#[test]
fn append_adds_to_end() {
    let mut state = GreetingsState::default();
    state.append(greeting(1, "a"));
    state.append(greeting(2, "b"));
    assert_eq!(state.items.last().map(|g| g.id), Some(2));
}

#[test]
fn remove_drops_matching_id() {
    let mut state = GreetingsState::default();
    state.append(greeting(1, "a"));
    state.append(greeting(2, "b"));
    assert!(state.remove(1));
    assert_eq!(state.items, vec![greeting(2, "b")]);
    assert!(!state.remove(99));
}
