//! Playlist ID extraction from IDs, URIs and share links.

/// Accepts a bare ID, `spotify:playlist:<id>`, or an
/// `https://open.spotify.com/playlist/<id>?si=...` link.
///
/// Returns `None` when no plausible (alphanumeric) ID can be found.
pub fn parse_playlist_id(input: &str) -> Option<String> {
    let input = input.trim();
    let candidate = if let Some(rest) = input.strip_prefix("spotify:playlist:") {
        rest.to_string()
    } else if input.contains("://") {
        let parsed = url::Url::parse(input).ok()?;
        let mut segments = parsed.path_segments()?;
        segments.find(|s| *s == "playlist")?;
        segments.next()?.to_string()
    } else {
        input.to_string()
    };

    if !candidate.is_empty() && candidate.chars().all(|c| c.is_ascii_alphanumeric()) {
        Some(candidate)
    } else {
        None
    }
}
