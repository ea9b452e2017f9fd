//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Greetings-app components read and write the shared `AuthState`,
//! `DialogState`, and `GreetingsState` signals from Leptos context; the
//! marketing-site widgets (`article_pager`, `main_nav`) own their state.

pub mod article_pager;
pub mod greeting_dialog;
pub mod greeting_list;
pub mod header;
pub mod login_dialog;
pub mod main_nav;
pub mod register_dialog;
