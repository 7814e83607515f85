use scraper::{Html, Selector};
use serde::Deserialize;

use crate::{
    error::MixtapeError,
    types::{PlaylistPreview, Track},
};

/// Cheap pre-filter: only script blocks mentioning this key are worth a full
/// JSON parse. A block containing the sentinel but not the right shape is
/// still skipped gracefully by the typed decode below.
const PAGE_PROPS_SENTINEL: &str = "\"pageProps\"";

// The fixed property path props.pageProps.state.data.entity, spelled out as
// a strict shape. Unknown siblings are ignored; a missing step fails the
// whole candidate.

#[derive(Deserialize)]
struct EmbedPayload {
    props: PayloadProps,
}

#[derive(Deserialize)]
struct PayloadProps {
    #[serde(rename = "pageProps")]
    page_props: PageProps,
}

#[derive(Deserialize)]
struct PageProps {
    state: PageState,
}

#[derive(Deserialize)]
struct PageState {
    data: PageData,
}

#[derive(Deserialize)]
struct PageData {
    entity: Entity,
}

#[derive(Deserialize)]
struct Entity {
    name: String,
    #[serde(default)]
    subtitle: String,
    #[serde(default)]
    description: String,
    #[serde(default, rename = "trackList")]
    track_list: Vec<EntityTrack>,
}

#[derive(Deserialize)]
struct EntityTrack {
    uri: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    subtitle: String,
}

/// Extracts the playlist entity from an embed page's inline script JSON.
///
/// Scans every inline `<script>` block and accepts the first one that parses
/// as JSON carrying the page-properties shape. Parse failures are "skip, try
/// next", never fatal: most blocks are code, and some are unrelated JSON
/// that may even contain the sentinel substring.
///
/// Track identifiers are the final `:`-separated segment of each entry's
/// provider URI (`spotify:track:<id>`); entries whose URI yields an empty
/// identifier are dropped.
///
/// # Errors
///
/// - `Unparseable` - no script block resolves to the expected entity shape
/// - `EmptyResult` - the entity matched but carries zero usable tracks
pub fn extract(html: &str) -> Result<PlaylistPreview, MixtapeError> {
    let document = Html::parse_document(html);
    let scripts = Selector::parse("script").unwrap();

    let mut entity: Option<Entity> = None;
    for script in document.select(&scripts) {
        let content: String = script.text().collect();
        if !content.contains(PAGE_PROPS_SENTINEL) {
            continue;
        }
        match serde_json::from_str::<EmbedPayload>(&content) {
            Ok(payload) => {
                entity = Some(payload.props.page_props.state.data.entity);
                break;
            }
            Err(_) => continue,
        }
    }

    let entity = entity.ok_or(MixtapeError::Unparseable)?;

    let tracks: Vec<Track> = entity
        .track_list
        .into_iter()
        .filter_map(|entry| {
            let id = entry.uri.rsplit(':').next().unwrap_or_default();
            if id.is_empty() {
                return None;
            }
            Some(Track {
                id: id.to_string(),
                name: entry.title,
                artist: entry.subtitle,
            })
        })
        .collect();

    if tracks.is_empty() {
        return Err(MixtapeError::EmptyResult);
    }

    Ok(PlaylistPreview {
        name: entity.name,
        owner: entity.subtitle,
        description: entity.description,
        tracks,
    })
}
