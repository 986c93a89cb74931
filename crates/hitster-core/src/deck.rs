//! Deck assembly: deterministic shuffle and QR codes.

use anyhow::{Context, Result};
use qrcode::render::svg;
use qrcode::QrCode;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use sha2::{Digest, Sha256};

use crate::config::QrContent;
use crate::model::DatedSong;

/// Seed string used for every deck, so a snapshot always prints the same order.
pub const DECK_SEED: &str = "hitster";

/// Shuffle `songs` with an RNG seeded from SHA-256 of `seed`.
pub fn shuffle_deck<T>(songs: &mut [T], seed: &str) {
    let digest: [u8; 32] = Sha256::digest(seed.as_bytes()).into();
    let mut rng = StdRng::from_seed(digest);
    songs.shuffle(&mut rng);
}

/// What goes into the QR code of `song`.
pub fn qr_payload(song: &DatedSong, content: QrContent) -> &str {
    match content {
        QrContent::Url => &song.url,
        QrContent::Id => &song.id,
    }
}

/// Render `content` as a standalone SVG document.
pub fn qr_svg(content: &str) -> Result<String> {
    let code = QrCode::new(content.as_bytes())
        .with_context(|| format!("encode QR code for {:?}", content))?;
    Ok(code
        .render::<svg::Color<'_>>()
        .min_dimensions(256, 256)
        .quiet_zone(false)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build())
}
