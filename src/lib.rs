//! PassForge - terminal client for a password-generation web service.
//!
//! The service owns password generation; this client collects generation
//! parameters through an interactive form or one-shot subcommands, issues a
//! JSON POST with the service's CSRF token attached, and renders the returned
//! password, passphrase, or analysis.
//!
//! Every request goes through [`api::ApiClient`], which decorates outgoing
//! calls with the `X-CSRFToken` header. The token is re-read from the
//! service's form page on each request, matching how the service's own web
//! form behaves.

pub mod api;
pub mod cli;
pub mod core;
pub mod models;
pub mod render;
pub mod utils;
