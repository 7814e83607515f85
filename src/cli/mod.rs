//! # CLI Module
//!
//! User-facing command implementations. Each command is a thin layer over
//! the library: it parses nothing (clap has already done that), delegates to
//! the import/codec/auth components, and owns the terminal experience:
//! spinners while fetching, tables for track listings, colored status lines.
//!
//! ## Commands
//!
//! - [`auth`] - Spotify OAuth PKCE flow; stores the token for later use
//! - [`create`] - Import a playlist, print the preview and mint the
//!   shareable mixtape link
//! - [`inspect`] - Decode a mixtape token and show what a recipient will get
//! - [`serve`] - Run the HTTP API server (import endpoint, health, callback)
//!
//! ## Error Presentation
//!
//! Import failures print as a single colored line with the user-facing
//! message from the error taxonomy, then exit non-zero; the command can
//! simply be re-run. An invalid token in `inspect` behaves the same way;
//! there is no recovery beyond asking for a new link.

mod auth;
mod create;
mod inspect;
mod serve;

pub use auth::auth;
pub use create::create;
pub use inspect::inspect;
pub use serve::serve;
