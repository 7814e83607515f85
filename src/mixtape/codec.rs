use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use scraper::Html;

use crate::types::EncodedMixtape;

/// Maximum number of characters of description carried inside a link.
pub const DESCRIPTION_LIMIT: usize = 100;

/// Serializes a mixtape record into a URL-safe, padding-free token.
///
/// The record is rendered as compact JSON and base64-encoded with the
/// URL-safe alphabet, no padding, so the result can sit unescaped in a path
/// segment. The caller is responsible for having run the description through
/// [`sanitize_description`] first; `encode_mixtape` does not re-check it.
///
/// # Example
///
/// ```
/// let token = encode_mixtape(&mixtape);
/// let link = format!("{}/listen/{}", base_url, token);
/// ```
pub fn encode_mixtape(mixtape: &EncodedMixtape) -> String {
    let json = serde_json::to_vec(mixtape).expect("mixtape record serializes to JSON");
    URL_SAFE_NO_PAD.encode(json)
}

/// Parses a token back into a mixtape record.
///
/// Reverses every step of [`encode_mixtape`]: base64 decode with the
/// URL-safe alphabet, then JSON parse into the record shape. Any failure at
/// any step (wrong alphabet, stray padding, malformed JSON, wrong shape, an
/// empty track list or an empty track id) yields `None`. Callers never
/// learn which step failed; a link is either valid or it is not.
///
/// Round-trip property: `decode_mixtape(&encode_mixtape(&x)) == Some(x)` for
/// every well-formed record.
pub fn decode_mixtape(token: &str) -> Option<EncodedMixtape> {
    let bytes = URL_SAFE_NO_PAD.decode(token.trim()).ok()?;
    let mixtape: EncodedMixtape = serde_json::from_slice(&bytes).ok()?;
    if mixtape.t.is_empty() || mixtape.t.iter().any(|id| id.is_empty()) {
        return None;
    }
    Some(mixtape)
}

/// Strips markup from a playlist description and bounds its length.
///
/// Spotify descriptions may carry anchor tags and HTML entities. The text is
/// parsed as an HTML fragment and flattened to its text content, whitespace
/// is collapsed, and the result is cut at [`DESCRIPTION_LIMIT`] characters on
/// a char boundary. Must run before a description is handed to
/// [`encode_mixtape`], since decode does not re-validate it.
pub fn sanitize_description(description: &str) -> String {
    let fragment = Html::parse_fragment(description);
    let text: String = fragment.root_element().text().collect::<Vec<_>>().join(" ");
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.chars().take(DESCRIPTION_LIMIT).collect()
}
