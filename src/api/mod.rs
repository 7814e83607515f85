//! # API Module
//!
//! HTTP endpoints served by the embedded axum server.
//!
//! ## Endpoints
//!
//! ### Import
//!
//! - [`playlist`] - `GET /playlist/{id}`. Runs the playlist import service
//!   and returns the preview as JSON. Failures map onto a fixed set of
//!   user-facing responses: 404 for a missing or empty playlist, 500 when
//!   the page could not be parsed. Parser internals never leak.
//!
//! ### Authentication
//!
//! - [`callback`] - `GET /callback`. Completes the OAuth PKCE flow by
//!   exchanging the authorization code, using the verifier stashed in the
//!   shared session state by the auth command.
//!
//! ### Monitoring
//!
//! - [`health`] - `GET /health`. Liveness and version, for deployment checks.
//!
//! ## Statelessness
//!
//! The import endpoint holds no state between requests and writes nothing:
//! the preview it returns is re-derived from the provider on every call, and
//! the mixtape link the caller mints from it is the only persistence in the
//! whole system.

mod callback;
mod health;
mod playlist;

pub use callback::callback;
pub use health::health;
pub use playlist::playlist;
