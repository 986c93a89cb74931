//! Hand-made cards from `--custom-card QR,TITLE,YEAR,ARTIST,MONTH`.

use thiserror::Error;

use crate::model::{DateSource, DatedSong};
use crate::release_date::ReleaseDate;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CustomCardError {
    #[error("custom card must have 5 fields (qr,title,year,artist,month), got {0}")]
    FieldCount(usize),
    #[error("custom card year must be YYYY, got {0:?}")]
    Year(String),
    #[error("custom card needs a QR payload and a title")]
    Empty,
}

/// Parse one custom card. `ordinal` becomes the card id (`custom_<ordinal>`).
pub fn parse_custom_card(spec: &str, ordinal: usize) -> Result<DatedSong, CustomCardError> {
    let parts: Vec<&str> = spec.split(',').map(str::trim).collect();
    let [qr, title, year, artist, month] = parts[..] else {
        return Err(CustomCardError::FieldCount(parts.len()));
    };
    if qr.is_empty() || title.is_empty() {
        return Err(CustomCardError::Empty);
    }
    let release_date: ReleaseDate = year
        .parse()
        .ok()
        .filter(|d: &ReleaseDate| d.precision() == 1)
        .ok_or_else(|| CustomCardError::Year(year.to_string()))?;

    Ok(DatedSong {
        id: format!("custom_{}", ordinal),
        name: title.to_string(),
        artists: if artist.is_empty() {
            Vec::new()
        } else {
            vec![artist.to_string()]
        },
        isrc: None,
        url: qr.to_string(),
        release_date,
        source: DateSource::Custom,
        month_label: Some(month.to_string()),
    })
}
