//! Mixtape CLI Library
//!
//! This library turns a public Spotify playlist into a compact, self-contained
//! "mixtape" link and plays such links back strictly one track at a time. All
//! state a recipient needs lives inside the link itself; the service keeps no
//! database.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints for the embedded server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - The crate-wide error taxonomy
//! - `management` - Token persistence and refresh
//! - `mixtape` - Link codec and the playlist import service
//! - `player` - Sequential playback controller and session driver
//! - `server` - Embedded HTTP server (import API, OAuth callback)
//! - `spotify` - Spotify integration (auth, embed page, entity extraction)
//! - `types` - Data structures and type definitions
//! - `utils` - PKCE helpers
//!
//! # Example
//!
//! ```
//! use mixtapecli::{config, mixtape};
//!
//! #[tokio::main]
//! async fn main() -> mixtapecli::Res<()> {
//!     config::load_env().await?;
//!     let preview = mixtape::import("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M").await?;
//!     println!("{} tracks", preview.tracks.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod mixtape;
pub mod player;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error trait object with Send + Sync bounds so it
/// composes across async boundaries. The CLI layer uses this alias; the core
/// import/codec/player components return [`error::MixtapeError`] instead,
/// because their callers need to distinguish failure classes.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Importing playlist {}", id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Mixtape link created");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates with exit code 1 immediately after printing. Only for fatal
/// errors where recovery is not possible.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// For recoverable issues or important notices that don't require program
/// termination.
///
/// # Example
///
/// ```
/// warning!("Failed to open browser, continue manually");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
