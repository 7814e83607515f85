//! Configuration management for the Mixtape CLI.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It centralizes the Spotify
//! credentials and endpoints, the embedded server settings, and the public
//! base URL that shareable listen links point at.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from `mixtapecli/.env` in the platform-specific
/// local data directory, so users can keep credentials out of their shell
/// profile.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/mixtapecli/.env`
/// - macOS: `~/Library/Application Support/mixtapecli/.env`
/// - Windows: `%LOCALAPPDATA%/mixtapecli/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is successfully loaded, or an
/// error string if directory creation or file loading fails.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("mixtapecli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(path).map_err(|e| e.to_string())?;
    Ok(())
}

/// Returns the bind address for the embedded HTTP server.
///
/// Used both by `mixtapecli serve` and by the temporary OAuth callback
/// server started during `mixtapecli auth`.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the public base URL that shareable listen links are minted under.
///
/// A created mixtape is shared as `{base}/listen/{token}`.
///
/// # Panics
///
/// Panics if the `MIXTAPE_LISTEN_URL` environment variable is not set.
pub fn listen_base_url() -> String {
    env::var("MIXTAPE_LISTEN_URL").expect("MIXTAPE_LISTEN_URL must be set")
}

/// Returns the base URL of Spotify's public embed pages.
///
/// The playlist import service fetches `{base}/playlist/{id}` and extracts
/// the inline entity JSON from the returned HTML.
///
/// # Panics
///
/// Panics if the `SPOTIFY_EMBED_URL` environment variable is not set.
pub fn spotify_embed_url() -> String {
    env::var("SPOTIFY_EMBED_URL").expect("SPOTIFY_EMBED_URL must be set")
}

/// Returns the Spotify API client ID for authentication.
///
/// The client ID comes from registering the application with Spotify's
/// developer platform. PKCE needs no client secret.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").expect("SPOTIFY_API_AUTH_CLIENT_ID must be set")
}

/// Returns the Spotify OAuth redirect URI.
///
/// Must match the redirect URI registered in the Spotify application
/// settings; the authorization server redirects here after user consent.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_REDIRECT_URI` environment variable is not set.
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_API_REDIRECT_URI").expect("SPOTIFY_API_REDIRECT_URI must be set")
}

/// Returns the Spotify API scope permissions requested during authorization.
///
/// Reading private and collaborative playlists is all this application ever
/// asks for.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_SCOPE` environment variable is not set.
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_API_AUTH_SCOPE").expect("SPOTIFY_API_AUTH_SCOPE must be set")
}

/// Returns the Spotify OAuth authorization URL.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_URL` environment variable is not set.
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL").expect("SPOTIFY_API_AUTH_URL must be set")
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Used for exchanging authorization codes for access tokens and for token
/// refresh.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_TOKEN_URL` environment variable is not set.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").expect("SPOTIFY_API_TOKEN_URL must be set")
}
