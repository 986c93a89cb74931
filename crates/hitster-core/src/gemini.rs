//! Generative-AI judge: asks Gemini for a song's original release year.
//!
//! Only a bare four-digit answer is trusted; the prompt tells the model to
//! answer "I dont know" otherwise, which is treated as no date.

use serde::{Deserialize, Serialize};

use crate::config::{Endpoints, ResolutionConfig};
use crate::http::HttpClient;
use crate::release_date::{parse_year_answer, ReleaseDate};
use crate::resolve::JudgeSource;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GenerateResponse {
    /// Text of the first candidate, parts concatenated.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        Some(content.parts.iter().map(|p| p.text.as_str()).collect())
    }
}

pub struct GeminiClient<'a> {
    http: &'a HttpClient,
    url: String,
    api_key: String,
}

impl<'a> GeminiClient<'a> {
    pub fn new(
        http: &'a HttpClient,
        endpoints: &Endpoints,
        cfg: &ResolutionConfig,
        api_key: String,
    ) -> Self {
        Self {
            http,
            url: format!(
                "{}/models/{}:generateContent",
                endpoints.gemini.trim_end_matches('/'),
                cfg.gemini_model
            ),
            api_key,
        }
    }
}

fn prompt(title: &str, artists: &[String]) -> String {
    format!(
        "What is the original first release date of the song '{}' by the artist {}?\n\
         Respond with only the year in the format YYYY. If you are not 100% sure, respond with 'I dont know'.",
        title,
        artists.join(", ")
    )
}

impl JudgeSource for GeminiClient<'_> {
    fn release_year(&self, title: &str, artists: &[String]) -> Option<ReleaseDate> {
        let text = prompt(title, artists);
        let request = GenerateRequest {
            contents: [Content {
                parts: [Part { text: &text }],
            }],
        };
        let response: GenerateResponse = match self.http.post_json(
            &self.url,
            &request,
            &[("x-goog-api-key", self.api_key.as_str())],
        ) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Gemini lookup for '{}' failed: {}", title, e);
                return None;
            }
        };
        let answer = response.text().unwrap_or_default();
        let year = parse_year_answer(&answer);
        tracing::debug!("Gemini on '{}': {:?} -> {:?}", title, answer.trim(), year);
        year
    }
}
