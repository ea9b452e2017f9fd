//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by widget (`auth`, `greetings`, `pagination`, `nav`, ...)
//! so each component depends on a small plain-data model. Components hold
//! these models in `RwSignal`s; all transition rules live here and are
//! testable without a browser.

pub mod auth;
pub mod dialogs;
pub mod greetings;
pub mod nav;
pub mod pagination;
pub mod scroll;
