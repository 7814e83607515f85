use crate::{
    error::MixtapeError,
    mixtape::codec,
    spotify::{embed, entity},
    types::{EncodedMixtape, PlaylistPreview},
};

/// Normalizes user input into a bare playlist identifier.
///
/// Accepts a full playlist URL or URI containing `playlist/<id>` or
/// `playlist:<id>`, or a bare 22-character alphanumeric identifier. Anything
/// else yields `None`.
pub fn extract_playlist_id(input: &str) -> Option<String> {
    let input = input.trim();

    for sep in ['/', ':'] {
        let marker = format!("playlist{sep}");
        if let Some(pos) = input.find(&marker) {
            let id: String = input[pos + marker.len()..]
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric())
                .collect();
            if !id.is_empty() {
                return Some(id);
            }
        }
    }

    if input.len() == 22 && input.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Some(input.to_string());
    }

    None
}

/// Imports a public playlist and produces the preview consumed by callers.
///
/// Steps: normalize the input to a playlist id, fetch the provider's public
/// embed page, extract the entity from its inline script JSON, and sanitize
/// the description. Extractor errors map one-to-one onto service errors;
/// a malformed identifier never reaches the network.
pub async fn import(raw_input: &str) -> Result<PlaylistPreview, MixtapeError> {
    let id = extract_playlist_id(raw_input).ok_or_else(|| {
        MixtapeError::InvalidInput(format!("not a playlist URL, URI or id: {raw_input}"))
    })?;

    let html = embed::fetch_embed_page(&id).await?;
    let mut preview = entity::extract(&html)?;
    preview.description = codec::sanitize_description(&preview.description);
    Ok(preview)
}

/// Reduces an import preview to the minimal record a link carries.
///
/// Track titles and artists are dropped; the external player re-renders them
/// from the identifier at playback time. The description is sanitized again
/// here so the invariant does not depend on where the preview came from.
pub fn preview_to_mixtape(preview: &PlaylistPreview) -> EncodedMixtape {
    EncodedMixtape {
        n: preview.name.clone(),
        o: preview.owner.clone(),
        d: codec::sanitize_description(&preview.description),
        t: preview.tracks.iter().map(|t| t.id.clone()).collect(),
    }
}
