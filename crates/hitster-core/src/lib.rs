pub mod config;
pub mod credentials;
pub mod logging;

pub mod custom_card;
pub mod deck;
pub mod filename;
pub mod gemini;
pub mod http;
pub mod model;
pub mod musicbrainz;
pub mod pipeline;
pub mod release_date;
pub mod render;
pub mod resolve;
pub mod retry;
pub mod snapshot;
pub mod spotify;
