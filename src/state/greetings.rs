//! Greetings list state.
//!
//! DESIGN
//! ======
//! Every auth event triggers a full reload. Reloads can overlap (log in, then
//! log out before the first list arrives), so each one is tagged with a load
//! sequence and only the newest issued load may replace `items`.

#[cfg(test)]
#[path = "greetings_test.rs"]
mod greetings_test;

use crate::net::types::Greeting;

#[derive(Clone, Debug, Default)]
pub struct GreetingsState {
    pub items: Vec<Greeting>,
    pub loading: bool,
    latest_load: u64,
}

impl GreetingsState {
    /// Start a reload; returns its sequence number.
    pub fn begin_load(&mut self) -> u64 {
        self.latest_load = self.latest_load.wrapping_add(1);
        self.loading = true;
        self.latest_load
    }

    /// Install the result of load `seq`. Returns `false` (and leaves the list
    /// untouched) when a newer load has been started since.
    pub fn finish_load(&mut self, seq: u64, items: Vec<Greeting>) -> bool {
        if seq != self.latest_load {
            return false;
        }
        self.items = items;
        self.loading = false;
        true
    }

    /// Load `seq` failed; the current list stays as rendered.
    pub fn abandon_load(&mut self, seq: u64) {
        if seq == self.latest_load {
            self.loading = false;
        }
    }

    /// Append a greeting the current user just created.
    pub fn append(&mut self, greeting: Greeting) {
        self.items.push(greeting);
    }

    /// Drop a deleted greeting. Returns whether it was present.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|greeting| greeting.id != id);
        self.items.len() != before
    }
}
