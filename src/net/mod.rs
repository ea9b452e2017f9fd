//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues HTTP requests and maps status codes to success/failure;
//! `types` defines the JSON schema shared with the backend.

pub mod api;
pub mod types;
