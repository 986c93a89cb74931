//! Output file naming: `hitster-<kind>-<playlist>.<ext>`, sanitized for Linux.

/// Sanitizes a candidate filename for safe use on Linux.
///
/// - Replaces NUL, `/`, `\`, whitespace and control characters with `_`
/// - Trims leading/trailing spaces, dots and underscores
/// - Collapses consecutive underscores
/// - Limits length to 255 bytes (Linux NAME_MAX)
pub fn sanitize_filename(name: &str) -> String {
    const NAME_MAX: usize = 255;

    let mut out = String::with_capacity(name.len());
    let mut prev_underscore = false;

    for c in name.chars() {
        let replacement = if c == '/' || c == '\\' || c.is_control() || c.is_whitespace() {
            '_'
        } else {
            c
        };

        if replacement == '_' {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else {
            out.push(replacement);
            prev_underscore = false;
        }
    }

    let trimmed = out.trim_matches(|c| c == '.' || c == '_');

    if trimmed.len() > NAME_MAX {
        let mut take = NAME_MAX;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        trimmed[..take].to_string()
    } else {
        trimmed.to_string()
    }
}

/// Default output name for a playlist artifact, e.g. `hitster-cards-<id>.pdf`.
pub fn output_name(kind: &str, playlist: &str, ext: &str) -> String {
    let stem = sanitize_filename(playlist);
    if stem.is_empty() {
        format!("hitster-{}.{}", kind, ext)
    } else {
        format!("hitster-{}-{}.{}", kind, stem, ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_slash_and_backslash() {
        assert_eq!(sanitize_filename("a/b\\c.txt"), "a_b_c.txt");
    }

    #[test]
    fn trims_dots_and_spaces() {
        assert_eq!(sanitize_filename("  ..  deck  ..  "), "deck");
    }

    #[test]
    fn collapses_underscores_and_controls() {
        assert_eq!(sanitize_filename("summer___mix\x00 2025"), "summer_mix_2025");
    }

    #[test]
    fn output_names() {
        assert_eq!(
            output_name("data", "37i9dQZF1DXcBWIGoYBM5M", "json"),
            "hitster-data-37i9dQZF1DXcBWIGoYBM5M.json"
        );
        assert_eq!(output_name("cards", "../..", "pdf"), "hitster-cards.pdf");
    }
}
