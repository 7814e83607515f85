//! # Mixtape Module
//!
//! The stateless core of the service: turning a playlist into a shareable
//! link and back.
//!
//! ## Overview
//!
//! Two pipelines share one wire format:
//!
//! ```text
//! creation:  import (fetch embed page → extract entity) → encode token
//! playback:  decode token → sequential playback controller
//! ```
//!
//! The encoded token is the only artifact that crosses that boundary. It is
//! self-describing and needs no server-side lookup, which is what lets the
//! whole service run without a database: the link *is* the storage.
//!
//! ## Submodules
//!
//! - [`codec`] - Serializes the minimal mixtape record to a URL-safe,
//!   padding-free token and back. Decoding either fully succeeds or fails
//!   with a single uniform "invalid link" outcome.
//! - [`import`] - Normalizes user input to a playlist id, fetches the public
//!   embed page and maps extraction failures one-to-one onto the service
//!   error taxonomy.
//!
//! ## Trust model
//!
//! Tokens carry no signature. Any well-formed token decodes and renders;
//! tamper-resistance is deliberately traded for statelessness. The one
//! consequence codec callers must respect: the description is sanitized
//! *before* encoding and is never re-validated on decode.

pub mod codec;
pub mod import;

pub use codec::{decode_mixtape, encode_mixtape, sanitize_description};
pub use import::{extract_playlist_id, import, preview_to_mixtape};
