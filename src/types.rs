use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artist: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistPreview {
    pub name: String,
    pub owner: String,
    pub description: String,
    pub tracks: Vec<Track>,
}

/// Minimal persisted form of a mixtape. The single-letter field names are the
/// wire format: they keep the encoded token short and match links minted by
/// earlier versions of the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedMixtape {
    /// playlist name
    pub n: String,
    /// owner display name
    pub o: String,
    /// description, markup-stripped and length-bounded before encoding
    pub d: String,
    /// ordered track identifiers
    pub t: Vec<String>,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub name: String,
    pub artist: String,
}

/// Periodic status report from the external single-track player widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatus {
    pub paused: bool,
    pub buffering: bool,
    pub duration_ms: u64,
    pub position_ms: u64,
}

/// Typed event union emitted by the external player integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerEvent {
    /// The underlying embed API (re)announced readiness; the current track
    /// must be loaded into the fresh widget.
    Ready,
    Status(PlayerStatus),
}
