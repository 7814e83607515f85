//! # Spotify Integration Module
//!
//! Everything that talks to, or understands the output of, Spotify's
//! services lives here. The rest of the crate sees playlists and tokens,
//! never HTTP or HTML.
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the OAuth 2.0 PKCE (Proof Key for Code Exchange)
//! flow: verifier/challenge generation, browser hand-off, a temporary local
//! callback server for the authorization code, code-for-token exchange and
//! token refresh. PKCE needs no client secret, so nothing sensitive is ever
//! stored beyond the tokens themselves.
//!
//! ### Embed Page Module
//!
//! [`embed`] - Fetches a playlist's public embed page. The page is served to
//! browsers, so the request carries a browser-like `User-Agent`; requests
//! without a plausible client identity may be rejected. One bounded retry on
//! transport errors only; HTTP error statuses are definitive.
//!
//! ### Entity Extraction Module
//!
//! [`entity`] - Locates the inline script JSON the embed page ships its
//! playlist data in and decodes it into the import preview shape. The scan
//! is tolerant (a block that fails to parse means "try the next one"), the
//! decode is strict (a typed shape, not ad-hoc probing).
//!
//! ## Error Handling
//!
//! `embed` and `entity` return [`crate::error::MixtapeError`] so the import
//! service can map failures one-to-one. `auth` keeps the looser
//! `reqwest::Error`/`String` results of a user-interactive flow, where every
//! failure ends in a printed message rather than a mapped status code.

pub mod auth;
pub mod embed;
pub mod entity;
